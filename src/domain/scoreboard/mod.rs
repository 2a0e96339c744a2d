// Scoreboard domain module
// Contains the scoreboard aggregate root, its records, value objects and events

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod records;
pub mod scoreboard;
pub mod snapshot;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{NotFoundError, ScoreboardError, ScoreboardResult, ValidationError};
pub use records::{PenaltyRecord, PlayerRecord};
pub use scoreboard::{Scoreboard, TopPlayers};
pub use snapshot::{ScoreboardSnapshot, TeamSnapshot};
pub use value_objects::{RecordId, TeamId, Winner};

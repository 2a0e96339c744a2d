// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod session_repository;

pub use session_repository::{SessionId, SessionRepository, SharedScoreboard};

use serde::Serialize;

use super::value_objects::{RecordId, TeamId};

/// Things that happened to a scoreboard
///
/// Every successful command appends one of these to the scoreboard's log.
/// The presentation layer shows [`ScoreboardEvent::message`] as the
/// confirmation for the command it just issued.
///
/// # Example
/// ```
/// use stomp_counter::domain::scoreboard::events::ScoreboardEvent;
/// use stomp_counter::domain::scoreboard::value_objects::{RecordId, TeamId};
///
/// let event = ScoreboardEvent::PlayerAdded {
///     team: TeamId::One,
///     record_id: RecordId::new(),
///     name: "Ana".to_string(),
/// };
/// assert_eq!(event.message(), "Added Ana's stats!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreboardEvent {
    /// A player record was appended to a team
    PlayerAdded {
        team: TeamId,
        record_id: RecordId,
        name: String,
    },
    /// A player's scores were replaced
    PlayerUpdated {
        team: TeamId,
        record_id: RecordId,
        name: String,
    },
    /// A player record was deleted
    PlayerRemoved {
        team: TeamId,
        record_id: RecordId,
        name: String,
    },
    /// A player record was reassigned to the other team
    PlayerMoved {
        from: TeamId,
        to: TeamId,
        record_id: RecordId,
        name: String,
    },
    /// A penalty was recorded against a team
    PenaltyAdded {
        team: TeamId,
        record_id: RecordId,
        amount: i64,
    },
    /// A penalty was deleted
    PenaltyRemoved {
        team: TeamId,
        record_id: RecordId,
        description: String,
    },
}

impl ScoreboardEvent {
    /// User-facing confirmation text
    pub fn message(&self) -> String {
        match self {
            ScoreboardEvent::PlayerAdded { name, .. } => format!("Added {}'s stats!", name),
            ScoreboardEvent::PlayerUpdated { name, .. } => format!("Updated {}'s stats", name),
            ScoreboardEvent::PlayerRemoved { name, team, .. } => {
                format!("Deleted {} from {}", name, team)
            }
            ScoreboardEvent::PlayerMoved { name, to, .. } => format!("Moved {} to {}", name, to),
            ScoreboardEvent::PenaltyAdded { team, .. } => format!("Added penalty to {}", team),
            ScoreboardEvent::PenaltyRemoved {
                description, team, ..
            } => format!("Deleted penalty '{}' from {}", description, team),
        }
    }
}

use thiserror::Error;

use super::value_objects::{RecordId, TeamId};

/// Rejected user input. The scoreboard is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Penalty description cannot be empty")]
    EmptyDescription,

    #[error("Scores cannot be negative (got {0})")]
    NegativeScore(i64),

    #[error("Score after ({after}) cannot be lower than score before ({before})")]
    ScoreDecreased { before: i64, after: i64 },

    #[error("Penalty amount must be positive (got {0})")]
    NonPositivePenalty(i64),

    #[error("Unknown team: {0} (must be 1 or 2)")]
    UnknownTeam(u8),

    #[error("Player is already on {0}")]
    SameTeam(TeamId),

    #[error("Scores on {0} are too large to total")]
    TotalOutOfRange(TeamId),
}

/// The record a command targeted does not exist on the given team.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("Player not found on {team}: {id}")]
    Player { team: TeamId, id: RecordId },

    #[error("Penalty not found on {team}: {id}")]
    Penalty { team: TeamId, id: RecordId },
}

/// Either failure, for commands that can hit both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::ValidationError;

/// One of the two competing teams
///
/// Serialized as the integer `1` or `2`, which is how the dashboards label them.
///
/// # Example
/// ```
/// use stomp_counter::domain::scoreboard::value_objects::TeamId;
///
/// let team = TeamId::try_from(2u8).expect("valid team");
/// assert_eq!(team, TeamId::Two);
/// assert!(TeamId::try_from(3u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    /// Both teams, in display order
    pub const ALL: [TeamId; 2] = [TeamId::One, TeamId::Two];

    /// Position of this team's sheet inside the scoreboard
    pub(crate) fn index(self) -> usize {
        match self {
            TeamId::One => 0,
            TeamId::Two => 1,
        }
    }

    /// Returns the numeric label (1 or 2)
    pub fn number(self) -> u8 {
        u8::from(self)
    }
}

impl TryFrom<u8> for TeamId {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamId::One),
            2 => Ok(TeamId::Two),
            other => Err(ValidationError::UnknownTeam(other)),
        }
    }
}

impl From<TeamId> for u8 {
    fn from(team: TeamId) -> Self {
        match team {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team {}", self.number())
    }
}

/// Stable identity of a player or penalty record
///
/// Assigned once at creation. Duplicate entries (same name, same scores)
/// still get distinct ids, so removal never depends on value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of comparing both team totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Team1,
    Team2,
    Tie,
}

impl Winner {
    /// Decides the outcome from the two team totals
    pub fn from_totals(team1_total: i64, team2_total: i64) -> Self {
        use std::cmp::Ordering;
        match team1_total.cmp(&team2_total) {
            Ordering::Greater => Winner::Team1,
            Ordering::Less => Winner::Team2,
            Ordering::Equal => Winner::Tie,
        }
    }
}

use serde::Serialize;

use super::records::{PenaltyRecord, PlayerRecord};
use super::scoreboard::Scoreboard;
use super::value_objects::{TeamId, Winner};

/// Everything needed to render one team's table and summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSnapshot {
    pub team: TeamId,
    pub players: Vec<PlayerRecord>,
    pub penalties: Vec<PenaltyRecord>,
    /// Sum of `score_before` over players (the table's TOTAL row)
    pub score_before_total: i64,
    /// Sum of `score_after` over players
    pub score_after_total: i64,
    /// Player differences plus penalty differences
    pub total: i64,
    pub top_players: Vec<PlayerRecord>,
}

impl TeamSnapshot {
    fn capture(board: &Scoreboard, team: TeamId, top_n: usize) -> Self {
        let players = board.players(team);
        Self {
            team,
            players: players.to_vec(),
            penalties: board.penalties(team).to_vec(),
            score_before_total: players.iter().map(PlayerRecord::score_before).sum(),
            score_after_total: players.iter().map(PlayerRecord::score_after).sum(),
            total: board.team_total(team),
            top_players: board.top_players(team, top_n).to_vec(),
        }
    }
}

/// Read-only copy of a whole scoreboard
///
/// Detached from the scoreboard it was taken from, so it can be handed to
/// the presentation layer and serialized after the lock is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreboardSnapshot {
    pub teams: Vec<TeamSnapshot>,
    pub winner: Winner,
}

impl ScoreboardSnapshot {
    pub fn capture(board: &Scoreboard, top_n: usize) -> Self {
        Self {
            teams: TeamId::ALL
                .iter()
                .map(|team| TeamSnapshot::capture(board, *team, top_n))
                .collect(),
            winner: board.winner(),
        }
    }

    pub fn team(&self, team: TeamId) -> Option<&TeamSnapshot> {
        self.teams.iter().find(|t| t.team == team)
    }
}

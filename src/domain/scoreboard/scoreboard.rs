use std::cmp::Reverse;

use super::errors::{NotFoundError, ScoreboardResult, ValidationError};
use super::events::ScoreboardEvent;
use super::records::{PenaltyRecord, PlayerRecord};
use super::snapshot::ScoreboardSnapshot;
use super::value_objects::{RecordId, TeamId, Winner};

/// Player and penalty lists of a single team, in insertion order
///
/// The sums of `score_before`, of `score_after` and of penalty amounts
/// always fit in an `i64`. Every difference is bounded by its
/// `score_after`, so the total fits as well.
#[derive(Debug, Clone, Default)]
struct TeamSheet {
    players: Vec<PlayerRecord>,
    penalties: Vec<PenaltyRecord>,
}

fn checked_sum(values: impl Iterator<Item = i64>) -> Option<i64> {
    values.fold(Some(0i64), |acc, value| acc?.checked_add(value))
}

impl TeamSheet {
    /// Whether the score sums stay in range once `candidate` joins the sheet,
    /// in place of the player `replacing` if one is given
    fn admits_player(&self, candidate: &PlayerRecord, replacing: Option<RecordId>) -> bool {
        let players = self
            .players
            .iter()
            .filter(|p| Some(p.id()) != replacing)
            .chain(std::iter::once(candidate));

        checked_sum(players.clone().map(PlayerRecord::score_before)).is_some()
            && checked_sum(players.map(PlayerRecord::score_after)).is_some()
    }

    fn admits_penalty(&self, candidate: &PenaltyRecord) -> bool {
        checked_sum(
            self.penalties
                .iter()
                .chain(std::iter::once(candidate))
                .map(PenaltyRecord::amount),
        )
        .is_some()
    }

    fn player_position(&self, id: RecordId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    fn penalty_position(&self, id: RecordId) -> Option<usize> {
        self.penalties.iter().position(|p| p.id() == id)
    }

    fn total(&self) -> i64 {
        let players: i64 = self.players.iter().map(PlayerRecord::difference).sum();
        let penalties: i64 = self.penalties.iter().map(PenaltyRecord::difference).sum();
        players + penalties
    }
}

/// Scoreboard aggregate root
///
/// Owns both teams' player and penalty records for one session and
/// computes every aggregate from them on demand.
///
/// # Invariants
/// - Records are only created through a validated add command
/// - Records are only destroyed by id, never by value
/// - Totals are derived from the current records; nothing is cached
/// - A failed command leaves every list unchanged
///
/// # Example
/// ```
/// use stomp_counter::domain::scoreboard::{Scoreboard, TeamId, Winner};
///
/// let mut board = Scoreboard::new();
/// board.add_player(TeamId::One, "Ana", 10, 15).expect("valid player");
/// board.add_penalty(TeamId::One, "late", 3).expect("valid penalty");
/// board.add_player(TeamId::Two, "Bo", 0, 10).expect("valid player");
///
/// assert_eq!(board.team_total(TeamId::One), 2);
/// assert_eq!(board.team_total(TeamId::Two), 10);
/// assert_eq!(board.winner(), Winner::Team2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    sheets: [TeamSheet; 2],
    events: Vec<ScoreboardEvent>,
}

impl Scoreboard {
    /// Creates an empty scoreboard
    pub fn new() -> Self {
        Self::default()
    }

    fn sheet(&self, team: TeamId) -> &TeamSheet {
        &self.sheets[team.index()]
    }

    fn sheet_mut(&mut self, team: TeamId) -> &mut TeamSheet {
        &mut self.sheets[team.index()]
    }

    // ===== Commands =====

    /// Appends a player to a team
    ///
    /// # Returns
    /// * `Ok(PlayerRecord)` - The stored record, including its id and difference
    /// * `Err(ValidationError)` - Blank name, negative score, score decrease,
    ///   or team sums that would no longer fit in an `i64`
    pub fn add_player(
        &mut self,
        team: TeamId,
        name: impl Into<String>,
        score_before: i64,
        score_after: i64,
    ) -> Result<PlayerRecord, ValidationError> {
        let player = PlayerRecord::new(name, score_before, score_after)?;
        if !self.sheet(team).admits_player(&player, None) {
            return Err(ValidationError::TotalOutOfRange(team));
        }

        self.sheet_mut(team).players.push(player.clone());
        self.events.push(ScoreboardEvent::PlayerAdded {
            team,
            record_id: player.id(),
            name: player.name().to_string(),
        });

        Ok(player)
    }

    /// Records a penalty against a team
    ///
    /// # Returns
    /// * `Err(ValidationError)` - Blank description, non-positive amount, or
    ///   penalty amounts that would no longer sum within an `i64`
    pub fn add_penalty(
        &mut self,
        team: TeamId,
        description: impl Into<String>,
        amount: i64,
    ) -> Result<PenaltyRecord, ValidationError> {
        let penalty = PenaltyRecord::new(description, amount)?;
        if !self.sheet(team).admits_penalty(&penalty) {
            return Err(ValidationError::TotalOutOfRange(team));
        }

        self.sheet_mut(team).penalties.push(penalty.clone());
        self.events.push(ScoreboardEvent::PenaltyAdded {
            team,
            record_id: penalty.id(),
            amount: penalty.amount(),
        });

        Ok(penalty)
    }

    /// Replaces a player's scores in place, keeping its id and position
    pub fn update_player(
        &mut self,
        team: TeamId,
        id: RecordId,
        score_before: i64,
        score_after: i64,
    ) -> ScoreboardResult<PlayerRecord> {
        let sheet = self.sheet_mut(team);
        let position = sheet
            .player_position(id)
            .ok_or(NotFoundError::Player { team, id })?;

        let mut player = sheet.players[position].clone();
        player.rescore(score_before, score_after)?;
        if !sheet.admits_player(&player, Some(id)) {
            return Err(ValidationError::TotalOutOfRange(team).into());
        }
        sheet.players[position] = player.clone();

        self.events.push(ScoreboardEvent::PlayerUpdated {
            team,
            record_id: id,
            name: player.name().to_string(),
        });

        Ok(player)
    }

    /// Deletes a player by id
    ///
    /// # Returns
    /// * `Ok(PlayerRecord)` - The record that was removed
    /// * `Err(NotFoundError)` - If the team has no player with that id
    pub fn remove_player(&mut self, team: TeamId, id: RecordId) -> Result<PlayerRecord, NotFoundError> {
        let sheet = self.sheet_mut(team);
        let position = sheet
            .player_position(id)
            .ok_or(NotFoundError::Player { team, id })?;
        let player = sheet.players.remove(position);

        self.events.push(ScoreboardEvent::PlayerRemoved {
            team,
            record_id: id,
            name: player.name().to_string(),
        });

        Ok(player)
    }

    /// Deletes a penalty by id
    pub fn remove_penalty(
        &mut self,
        team: TeamId,
        id: RecordId,
    ) -> Result<PenaltyRecord, NotFoundError> {
        let sheet = self.sheet_mut(team);
        let position = sheet
            .penalty_position(id)
            .ok_or(NotFoundError::Penalty { team, id })?;
        let penalty = sheet.penalties.remove(position);

        self.events.push(ScoreboardEvent::PenaltyRemoved {
            team,
            record_id: id,
            description: penalty.description().to_string(),
        });

        Ok(penalty)
    }

    /// Reassigns a player to another team in one step
    ///
    /// The record keeps its id and is appended to the end of the
    /// destination list. Nothing changes if the command fails.
    ///
    /// # Returns
    /// * `Err(ScoreboardError::Validation)` - `from` and `to` are the same team
    /// * `Err(ScoreboardError::NotFound)` - No player with that id on `from`
    pub fn move_to_team(
        &mut self,
        id: RecordId,
        from: TeamId,
        to: TeamId,
    ) -> ScoreboardResult<PlayerRecord> {
        if from == to {
            return Err(ValidationError::SameTeam(to).into());
        }

        let position = self
            .sheet(from)
            .player_position(id)
            .ok_or(NotFoundError::Player { team: from, id })?;
        if !self.sheet(to).admits_player(&self.sheet(from).players[position], None) {
            return Err(ValidationError::TotalOutOfRange(to).into());
        }
        let player = self.sheet_mut(from).players.remove(position);
        self.sheet_mut(to).players.push(player.clone());

        self.events.push(ScoreboardEvent::PlayerMoved {
            from,
            to,
            record_id: id,
            name: player.name().to_string(),
        });

        Ok(player)
    }

    // ===== Queries =====

    /// Players of a team, in insertion order
    pub fn players(&self, team: TeamId) -> &[PlayerRecord] {
        &self.sheet(team).players
    }

    /// Penalties of a team, in insertion order
    pub fn penalties(&self, team: TeamId) -> &[PenaltyRecord] {
        &self.sheet(team).penalties
    }

    pub fn player(&self, team: TeamId, id: RecordId) -> Option<&PlayerRecord> {
        self.players(team).iter().find(|p| p.id() == id)
    }

    pub fn penalty(&self, team: TeamId, id: RecordId) -> Option<&PenaltyRecord> {
        self.penalties(team).iter().find(|p| p.id() == id)
    }

    /// Sum of player differences plus penalty differences
    pub fn team_total(&self, team: TeamId) -> i64 {
        self.sheet(team).total()
    }

    /// Best `n` players of a team by difference
    pub fn top_players(&self, team: TeamId, n: usize) -> TopPlayers<'_> {
        TopPlayers {
            players: self.players(team),
            limit: n,
        }
    }

    pub fn winner(&self) -> Winner {
        Winner::from_totals(self.team_total(TeamId::One), self.team_total(TeamId::Two))
    }

    /// True when neither team has any player or penalty
    pub fn is_empty(&self) -> bool {
        self.sheets
            .iter()
            .all(|s| s.players.is_empty() && s.penalties.is_empty())
    }

    /// Log of every successful command, oldest first
    pub fn events(&self) -> &[ScoreboardEvent] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&ScoreboardEvent> {
        self.events.last()
    }

    /// Read-only copy of the current state for rendering
    pub fn snapshot(&self, top_n: usize) -> ScoreboardSnapshot {
        ScoreboardSnapshot::capture(self, top_n)
    }
}

/// Ranking view over a team's players
///
/// Borrowed from the scoreboard, so the board cannot change while the view
/// is alive. Every call to [`TopPlayers::iter`] re-ranks from the current
/// records; ties keep insertion order.
#[derive(Debug, Clone, Copy)]
pub struct TopPlayers<'a> {
    players: &'a [PlayerRecord],
    limit: usize,
}

impl<'a> TopPlayers<'a> {
    pub fn iter(&self) -> std::iter::Take<std::vec::IntoIter<&'a PlayerRecord>> {
        let mut ranked: Vec<&'a PlayerRecord> = self.players.iter().collect();
        // stable: equal differences stay in insertion order
        ranked.sort_by_key(|p| Reverse(p.difference()));
        ranked.into_iter().take(self.limit)
    }

    pub fn len(&self) -> usize {
        self.players.len().min(self.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<PlayerRecord> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for TopPlayers<'a> {
    type Item = &'a PlayerRecord;
    type IntoIter = std::iter::Take<std::vec::IntoIter<&'a PlayerRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &TopPlayers<'a> {
    type Item = &'a PlayerRecord;
    type IntoIter = std::iter::Take<std::vec::IntoIter<&'a PlayerRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

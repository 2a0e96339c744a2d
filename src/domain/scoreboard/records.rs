use chrono::{DateTime, Utc};
use serde::Serialize;

use super::errors::ValidationError;
use super::value_objects::RecordId;

/// A player's stomp tally for one round
///
/// # Invariants
/// - Name is not blank
/// - `0 <= score_before <= score_after`
/// - `difference == score_after - score_before`, recomputed on every change
///
/// # Example
/// ```
/// use stomp_counter::domain::scoreboard::PlayerRecord;
///
/// let ana = PlayerRecord::new("Ana", 10, 15).expect("valid player");
/// assert_eq!(ana.difference(), 5);
/// assert!(PlayerRecord::new("Ana", 15, 10).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    id: RecordId,
    name: String,
    score_before: i64,
    score_after: i64,
    difference: i64,
    created_at: DateTime<Utc>,
}

impl PlayerRecord {
    /// Creates a validated record with a fresh id
    ///
    /// # Returns
    /// * `Err(ValidationError)` - If the name is blank, a score is negative,
    ///   or the score went down
    pub fn new(
        name: impl Into<String>,
        score_before: i64,
        score_after: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validate_scores(score_before, score_after)?;

        Ok(Self {
            id: RecordId::new(),
            name,
            score_before,
            score_after,
            difference: score_after - score_before,
            created_at: Utc::now(),
        })
    }

    /// Replaces both scores, keeping the id and name
    ///
    /// Leaves the record untouched when validation fails.
    pub fn rescore(&mut self, score_before: i64, score_after: i64) -> Result<(), ValidationError> {
        validate_scores(score_before, score_after)?;
        self.score_before = score_before;
        self.score_after = score_after;
        self.difference = score_after - score_before;
        Ok(())
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score_before(&self) -> i64 {
        self.score_before
    }

    pub fn score_after(&self) -> i64 {
        self.score_after
    }

    /// Stomps gained this round
    pub fn difference(&self) -> i64 {
        self.difference
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn validate_scores(score_before: i64, score_after: i64) -> Result<(), ValidationError> {
    if score_before < 0 {
        return Err(ValidationError::NegativeScore(score_before));
    }
    if score_after < 0 {
        return Err(ValidationError::NegativeScore(score_after));
    }
    if score_after < score_before {
        return Err(ValidationError::ScoreDecreased {
            before: score_before,
            after: score_after,
        });
    }
    Ok(())
}

/// A deduction from a team's total, not tied to any player
///
/// `difference` is always `-amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenaltyRecord {
    id: RecordId,
    description: String,
    amount: i64,
    difference: i64,
    created_at: DateTime<Utc>,
}

impl PenaltyRecord {
    /// Creates a validated penalty with a fresh id
    ///
    /// # Returns
    /// * `Err(ValidationError)` - If the description is blank or the amount is not positive
    pub fn new(description: impl Into<String>, amount: i64) -> Result<Self, ValidationError> {
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if amount <= 0 {
            return Err(ValidationError::NonPositivePenalty(amount));
        }

        Ok(Self {
            id: RecordId::new(),
            description,
            amount,
            difference: -amount,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn difference(&self) -> i64 {
        self.difference
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

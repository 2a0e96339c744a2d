use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::scoreboard::Scoreboard;

/// Identifies one user session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session's scoreboard
///
/// Holding the lock for the duration of a command serializes commands
/// issued against the same session.
pub type SharedScoreboard = Arc<Mutex<Scoreboard>>;

/// Repository trait for per-session scoreboards
///
/// Each session owns exactly one scoreboard, independent from every other
/// session. Nothing is persisted past the session's lifetime.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns the session's scoreboard, creating an empty one on first access
    async fn open(&self, id: SessionId) -> SharedScoreboard;

    /// Ends a session and discards its scoreboard
    async fn close(&self, id: SessionId) -> Result<(), String>;

    /// Discards every session idle for longer than `max_idle`, returning how many were dropped
    async fn purge_idle(&self, max_idle: Duration) -> usize;

    /// Number of live sessions
    async fn count(&self) -> usize;
}

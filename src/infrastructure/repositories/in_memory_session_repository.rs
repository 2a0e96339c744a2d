use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::repositories::{SessionId, SessionRepository, SharedScoreboard};
use crate::domain::scoreboard::Scoreboard;

struct SessionEntry {
    scoreboard: SharedScoreboard,
    last_access: DateTime<Utc>,
}

/// In-process implementation of SessionRepository
///
/// Sessions live in a map guarded by an async mutex and disappear with the
/// process, or earlier through `close` or `purge_idle`.
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn open(&self, id: SessionId) -> SharedScoreboard {
        let mut sessions = self.sessions.lock().await;

        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::info!("Created session {}", id);
            SessionEntry {
                scoreboard: Arc::new(Mutex::new(Scoreboard::new())),
                last_access: Utc::now(),
            }
        });
        entry.last_access = Utc::now();

        Arc::clone(&entry.scoreboard)
    }

    async fn close(&self, id: SessionId) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        match sessions.remove(&id) {
            Some(_) => {
                tracing::info!("Closed session {}", id);
                Ok(())
            }
            None => Err(format!("Session not found: {}", id)),
        }
    }

    async fn purge_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_access <= max_idle);
        before - sessions.len()
    }

    async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

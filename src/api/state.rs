use chrono::Duration;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::repositories::{SessionId, SessionRepository, SharedScoreboard};
use crate::infrastructure::repositories::InMemorySessionRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub top_players_count: usize,
    /// Sessions idle for longer than this are discarded; `None` keeps them forever
    pub session_idle_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionRepository>, top_players_count: usize) -> Self {
        Self {
            sessions,
            top_players_count,
            session_idle_timeout: None,
        }
    }

    pub fn with_idle_timeout(mut self, max_idle: Duration) -> Self {
        self.session_idle_timeout = Some(max_idle);
        self
    }

    /// In-memory sessions with the configured idle timeout
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(InMemorySessionRepository::new()), config.top_players_count)
            .with_idle_timeout(config.session_idle_timeout())
    }

    /// Opens a session after discarding every idle one
    ///
    /// Purging here, on each access, means no background task is needed.
    pub async fn open_session(&self, id: SessionId) -> SharedScoreboard {
        if let Some(max_idle) = self.session_idle_timeout {
            let purged = self.sessions.purge_idle(max_idle).await;
            if purged > 0 {
                tracing::info!("Purged {} idle session(s)", purged);
            }
        }

        self.sessions.open(id).await
    }
}

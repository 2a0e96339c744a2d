use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::repositories::SessionId;

/// Header carrying the caller's session id
pub const SESSION_HEADER: &str = "x-session-id";

/// Session extractor for scoreboard routes
///
/// Usage:
/// ```rust
/// use stomp_counter::api::middleware::CurrentSession;
///
/// async fn handler(CurrentSession(session): CurrentSession) -> String {
///     format!("Hello session {}", session)
/// }
/// ```
pub struct CurrentSession(pub SessionId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::bad_request(format!("Missing {} header", SESSION_HEADER)))?;

        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| ApiError::bad_request(format!("Invalid session id: {}", raw)))?;

        Ok(CurrentSession(SessionId::from(id)))
    }
}

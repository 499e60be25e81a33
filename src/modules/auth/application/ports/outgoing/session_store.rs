use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Registry of the single live session per user.
///
/// Only a hash of the session id is handed to the store. Starting a session
/// replaces whatever session the user had before, so an older cookie stops
/// resolving on its next request.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn start_session(
        &self,
        user_id: UserId,
        session_hash: &str,
        ttl_seconds: i64,
    ) -> Result<(), SessionStoreError>;

    async fn is_current_session(
        &self,
        user_id: UserId,
        session_hash: &str,
    ) -> Result<bool, SessionStoreError>;

    /// No-op when `session_hash` is no longer the current one.
    async fn end_session(&self, user_id: UserId, session_hash: &str)
        -> Result<(), SessionStoreError>;
}

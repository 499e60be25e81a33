use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserId,
    ports::outgoing::{SessionStore, TokenProvider},
    services::hash::hash_token,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session store error: {0}")]
    SessionStoreError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    session_store: Arc<dyn SessionStore + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        session_store: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            session_store,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, session_token: &str) -> Result<(), LogoutError> {
        // An expired token still identifies the session to end
        let claims = self
            .token_provider
            .decode_session_token_allow_expired(session_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        let user_id = UserId::from(claims.sub);

        // Only removes the entry if it still belongs to this session
        self.session_store
            .end_session(user_id, &hash_token(&claims.sid))
            .await
            .map_err(|e| LogoutError::SessionStoreError(e.to_string()))?;

        tracing::info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}

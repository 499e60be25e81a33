use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{AuthPrincipal, UserId},
    ports::outgoing::{token_provider::TokenError, SessionStore, TokenProvider, UserQuery},
    services::hash::hash_token,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session expired")]
    Expired,

    #[error("Invalid session")]
    Invalid,

    #[error("Session replaced by a newer login")]
    Superseded,

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ResolveSessionError {
    /// Whether the login page should say the session ran out.
    pub fn is_expiry(&self) -> bool {
        matches!(self, Self::Expired | Self::Superseded)
    }
}

/// Turns a session cookie into the requesting principal.
#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, session_token: &str) -> Result<AuthPrincipal, ResolveSessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    session_store: Arc<dyn SessionStore + Send + Sync>,
}

impl<Q> ResolveSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        session_store: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self {
            query,
            token_provider,
            session_store,
        }
    }
}

#[async_trait]
impl<Q> IResolveSessionUseCase for ResolveSessionUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, session_token: &str) -> Result<AuthPrincipal, ResolveSessionError> {
        let claims = self
            .token_provider
            .verify_session_token(session_token)
            .map_err(|e| match e {
                TokenError::TokenExpired => ResolveSessionError::Expired,
                _ => ResolveSessionError::Invalid,
            })?;

        let user_id = UserId::from(claims.sub);

        let is_current = self
            .session_store
            .is_current_session(user_id, &hash_token(&claims.sid))
            .await
            .map_err(|e| ResolveSessionError::StoreUnavailable(e.to_string()))?;

        if !is_current {
            tracing::warn!(user_id = %user_id, "Rejected superseded or ended session");
            return Err(ResolveSessionError::Superseded);
        }

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ResolveSessionError::StoreUnavailable(e.to_string()))?
            .filter(|u| u.enabled)
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Session belongs to a missing or disabled user");
                ResolveSessionError::Invalid
            })?;

        Ok(AuthPrincipal::from_user(&user))
    }
}

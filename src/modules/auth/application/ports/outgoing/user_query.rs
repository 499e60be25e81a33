// application/ports/outgoing/user_query.rs
use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the credential store. Emails are expected in normalized form.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// Only accounts with `enabled = true` may authenticate.
    async fn find_enabled_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserQueryError>;
}

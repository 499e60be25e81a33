use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// New accounts are always enabled.
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::{credentials::normalize_email, entities::AuthPrincipal},
    ports::outgoing::{PasswordHasher, SessionStore, TokenProvider, UserQuery},
    services::hash::{generate_session_id, hash_token},
};

// ========================= Login Request =========================
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - normalized
    password: String, // Private - non-empty
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = normalize_email(&email);
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Session store error: {0}")]
    SessionStoreError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
    pub session_token: String,
    pub expires_in: i64,
    pub principal: AuthPrincipal,
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    session_store: Arc<dyn SessionStore + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        session_store: Arc<dyn SessionStore + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
            session_store,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // Disabled accounts are indistinguishable from unknown ones
        let user = self
            .query
            .find_enabled_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            tracing::info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let session_id = generate_session_id();
        let issued = self
            .token_provider
            .generate_session_token(user.id.value(), &session_id, &user.email, &user.name)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        // Replaces any earlier session of this user
        self.session_store
            .start_session(user.id, &hash_token(&session_id), issued.expires_in)
            .await
            .map_err(|e| LoginError::SessionStoreError(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginUserResponse {
            session_token: issued.token,
            expires_in: issued.expires_in,
            principal: AuthPrincipal::from_user(&user),
        })
    }
}

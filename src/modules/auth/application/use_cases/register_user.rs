use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::{
        credentials::{is_valid_email, normalize_email, NAME_MAX_LEN},
        entities::User,
    },
    ports::{
        incoming::password_policy::{PasswordPolicy, PasswordPolicyError},
        outgoing::{
            user_repository::CreateUserData, PasswordHasher, UserQuery, UserRepository,
            UserRepositoryError,
        },
    },
};

// ========================= Register Input =========================
/// Raw registration form, validated by the use case.
#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at most {0} characters")]
    NameTooLong(usize),

    #[error("Email is required")]
    EmailRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("{0}")]
    WeakPassword(PasswordPolicyError),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl RegistrationValidationError {
    /// Form field the message belongs next to.
    pub fn field(&self) -> RegistrationField {
        match self {
            Self::NameRequired | Self::NameTooLong(_) => RegistrationField::Name,
            Self::EmailRequired | Self::InvalidEmail => RegistrationField::Email,
            Self::PasswordMismatch | Self::WeakPassword(_) => RegistrationField::Password,
        }
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    Validation(RegistrationValidationError),

    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================ Register Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }

    /// Checks run in form order; the first failure wins.
    fn validate(
        &self,
        input: &RegisterUserInput,
    ) -> Result<(String, String), RegistrationValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RegistrationValidationError::NameRequired);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(RegistrationValidationError::NameTooLong(NAME_MAX_LEN));
        }

        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(RegistrationValidationError::EmailRequired);
        }

        if input.password != input.confirm_password {
            return Err(RegistrationValidationError::PasswordMismatch);
        }

        self.password_policy
            .validate(&input.password)
            .map_err(RegistrationValidationError::WeakPassword)?;

        if !is_valid_email(Some(&email)) {
            return Err(RegistrationValidationError::InvalidEmail);
        }

        Ok((name.to_string(), email))
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, RegisterUserError> {
        let (name, email) = self
            .validate(&input)
            .map_err(RegisterUserError::Validation)?;

        // Fast path only; the unique index below is what actually guarantees it
        let exists = self
            .query
            .exists_by_email(&email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if exists {
            return Err(RegisterUserError::DuplicateEmail);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            email,
            name,
            password_hash,
        };

        let user = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::DuplicateEmail,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}

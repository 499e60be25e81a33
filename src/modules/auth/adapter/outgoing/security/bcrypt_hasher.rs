use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(password, cost).map_err(|_| HashError::HashFailed))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

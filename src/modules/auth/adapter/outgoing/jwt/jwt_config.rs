use std::env;

use crate::config::{parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load session token configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("SESSION_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "SESSION_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let session_expiry: i64 = parse_or("SESSION_TTL_SECONDS", 1800)?;
        if session_expiry <= 0 || session_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_SECONDS",
                reason: "must be between 1 and 86400 seconds (24 hours)".to_string(),
            });
        }

        let issuer = env::var("SESSION_ISSUER").unwrap_or_else(|_| "todo-app".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}

use std::env;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for PasswordHasherKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            other => Err(format!("unknown password hasher '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub redis_url: String,
    pub jwt: JwtConfig,
    pub password_hasher: PasswordHasherKind,
    pub argon2: Argon2Settings,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let database = DatabaseSettings {
            url: required("DATABASE_URL")?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 20)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", 2)?,
        };

        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: "must not exceed DB_MAX_CONNECTIONS".to_string(),
            });
        }

        let argon2 = Argon2Settings {
            memory_kib: parse_or("ARGON2_MEMORY_KIB", 4 * 1024)?,
            iterations: parse_or("ARGON2_ITERATIONS", 3)?,
            parallelism: parse_or("ARGON2_PARALLELISM", 1)?,
        };

        let cookie_secure = parse_or("COOKIE_SECURE", rust_env == "production")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080)?,
            database,
            redis_url: required("REDIS_URL")?,
            jwt: JwtConfig::from_env()?,
            password_hasher: parse_or("PASSWORD_HASHER", PasswordHasherKind::Argon2)?,
            argon2,
            cookie_secure,
            rust_env,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims carried by the session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,          // User ID
    pub sid: String,        // Session id, matched against the session store
    pub email: String,
    pub name: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    pub token_type: String, // always "session"
}

#[derive(Debug, Clone)]
pub struct IssuedSessionToken {
    pub token: String,
    pub expires_in: i64,
}

pub trait TokenProvider: Send + Sync {
    fn generate_session_token(
        &self,
        user_id: Uuid,
        session_id: &str,
        email: &str,
        name: &str,
    ) -> Result<IssuedSessionToken, TokenError>;

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError>;

    /// Same as `verify_session_token` but accepts expired tokens, for logout.
    fn decode_session_token_allow_expired(&self, token: &str)
        -> Result<SessionClaims, TokenError>;
}

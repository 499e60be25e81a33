use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    IssuedSessionToken, SessionClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

const SESSION_TOKEN_TYPE: &str = "session";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("session_expiry", &self.config.session_expiry)
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self, validate_exp: bool) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.validate_exp = validate_exp;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }

    fn decode_claims(
        &self,
        token: &str,
        validation: &Validation,
    ) -> Result<SessionClaims, TokenError> {
        let decoded =
            decode::<SessionClaims>(token, &self.decoding_key, validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Session token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Session token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid session token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Session token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Session token verification failed: {}", e);
                        TokenError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;
        if claims.token_type != SESSION_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                SESSION_TOKEN_TYPE,
                claims.token_type
            );
            return Err(TokenError::InvalidTokenType(SESSION_TOKEN_TYPE.to_string()));
        }

        Ok(claims)
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_session_token(
        &self,
        user_id: Uuid,
        session_id: &str,
        email: &str,
        name: &str,
    ) -> Result<IssuedSessionToken, TokenError> {
        let now = Utc::now();
        let expires_in = self.config.session_expiry;
        let expiration = now + Duration::seconds(expires_in);

        let claims = SessionClaims {
            sub: user_id,
            sid: session_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: SESSION_TOKEN_TYPE.to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))?;

        Ok(IssuedSessionToken { token, expires_in })
    }

    fn verify_session_token(&self, token: &str) -> Result<SessionClaims, TokenError> {
        self.decode_claims(token, &self.validation(true))
    }

    fn decode_session_token_allow_expired(
        &self,
        token: &str,
    ) -> Result<SessionClaims, TokenError> {
        self.decode_claims(token, &self.validation(false))
    }
}

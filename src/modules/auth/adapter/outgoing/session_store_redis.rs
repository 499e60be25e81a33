use async_trait::async_trait;
use deadpool_redis::{
    redis::{AsyncCommands, Script},
    Pool,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::session_store::{SessionStore, SessionStoreError};

/// Deletes the key only while it still holds the caller's session.
const END_SESSION_SCRIPT: &str = r#"
if redis.call('GET', KEYS[1]) == ARGV[1] then
    return redis.call('DEL', KEYS[1])
end
return 0
"#;

/// Redis-backed implementation of `SessionStore`.
///
/// ## Redis data model
/// ```text
/// auth:session:user:{user_id} -> "{sha256(session_id)}"
/// ```
/// - One key per user, so a fresh login overwrites (and thereby revokes)
///   the previous session
/// - TTL = session lifetime; Redis handles cleanup
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: Arc<Pool>,
}

impl RedisSessionStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn user_key(user_id: UserId) -> String {
        format!("auth:session:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Unavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn start_session(
        &self,
        user_id: UserId,
        session_hash: &str,
        ttl_seconds: i64,
    ) -> Result<(), SessionStoreError> {
        if ttl_seconds <= 0 {
            return Err(SessionStoreError::Unavailable(
                "Session TTL must be positive".to_string(),
            ));
        }

        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(Self::user_key(user_id), session_hash, ttl_seconds as u64)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn is_current_session(
        &self,
        user_id: UserId,
        session_hash: &str,
    ) -> Result<bool, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let current: Option<String> = conn
            .get(Self::user_key(user_id))
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        Ok(current.as_deref() == Some(session_hash))
    }

    async fn end_session(
        &self,
        user_id: UserId,
        session_hash: &str,
    ) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let _: i64 = Script::new(END_SESSION_SCRIPT)
            .key(Self::user_key(user_id))
            .arg(session_hash)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

use async_trait::async_trait;
use chrono::{Duration, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

use crate::accounts::application::ports::outgoing::{
    NewSession, SessionRecord, SessionStore, SessionStoreError,
};
use crate::accounts::application::services::token_hasher::hash_token;

const SESSION_KEY_LEN: usize = 40;

/// Redis-backed server-side sessions.
///
/// ```text
/// auth:session:{sha256(session_key)} -> JSON SessionRecord   (EX = session ttl)
/// ```
///
/// The raw key only ever lives in the client cookie. Expiry is left to the Redis TTL.
#[derive(Clone)]
pub struct SessionStoreRedis {
    pool: Arc<Pool>,
}

impl SessionStoreRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn redis_key(session_key: &str) -> String {
        format!("auth:session:{}", hash_token(session_key))
    }

    fn generate_session_key() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_KEY_LEN)
            .map(char::from)
            .collect()
    }

    fn build_record(session: &NewSession) -> Result<SessionRecord, SessionStoreError> {
        if session.ttl_seconds <= 0 {
            return Err(SessionStoreError::InvalidTtl);
        }

        let created_at = Utc::now();
        Ok(SessionRecord {
            user_id: session.user_id,
            remember: session.remember,
            created_at,
            expires_at: created_at + Duration::seconds(session.ttl_seconds),
        })
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::StorageError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionStore for SessionStoreRedis {
    async fn create(&self, session: NewSession) -> Result<String, SessionStoreError> {
        let record = Self::build_record(&session)?;
        let payload = serde_json::to_string(&record)
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;

        let session_key = Self::generate_session_key();
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::cmd("SET")
            .arg(Self::redis_key(&session_key))
            .arg(payload)
            .arg("EX")
            .arg(session.ttl_seconds)
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;

        Ok(session_key)
    }

    async fn load(&self, session_key: &str) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut conn = self.get_conn().await?;

        let payload: Option<String> = conn
            .get(Self::redis_key(session_key))
            .await
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let record: SessionRecord = serde_json::from_str(&payload)
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;

        if record.expires_at <= Utc::now() {
            return Ok(None);
        }

        Ok(Some(record))
    }

    /// Idempotent: deleting an unknown key succeeds.
    async fn delete(&self, session_key: &str) -> Result<(), SessionStoreError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::redis_key(session_key))
            .await
            .map_err(|e| SessionStoreError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;
    use uuid::Uuid;

    static TLS_INIT: Once = Once::new();

    fn init_tls() {
        TLS_INIT.call_once(|| {
            let _ = rustls::crypto::ring::default_provider().install_default();
        });
    }

    /// `None` when no Redis is configured; those tests then return early.
    fn setup_store() -> Option<SessionStoreRedis> {
        init_tls();
        let Ok(redis_url) = std::env::var("REDIS_URL") else {
            eprintln!("REDIS_URL not set; skipping Redis integration test");
            return None;
        };

        let pool = deadpool_redis::Config::from_url(&redis_url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        Some(SessionStoreRedis::new(Arc::new(pool)))
    }

    fn new_session(ttl_seconds: i64) -> NewSession {
        NewSession {
            user_id: Uuid::new_v4(),
            remember: false,
            ttl_seconds,
        }
    }

    #[test]
    fn test_redis_key_never_contains_raw_key() {
        let key = SessionStoreRedis::redis_key("raw-session-key");
        assert!(key.starts_with("auth:session:"));
        assert!(!key.contains("raw-session-key"));
    }

    #[test]
    fn test_generated_keys_are_long_and_unique() {
        let a = SessionStoreRedis::generate_session_key();
        let b = SessionStoreRedis::generate_session_key();

        assert_eq!(a.len(), SESSION_KEY_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_expiry_follows_ttl() {
        let record = SessionStoreRedis::build_record(&NewSession {
            remember: true,
            ..new_session(1_209_600)
        })
        .unwrap();

        assert!(record.remember);
        assert_eq!(
            (record.expires_at - record.created_at).num_seconds(),
            1_209_600
        );
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        assert_eq!(
            SessionStoreRedis::build_record(&new_session(0)),
            Err(SessionStoreError::InvalidTtl)
        );
    }

    #[tokio::test]
    async fn create_then_load_then_delete() {
        let Some(store) = setup_store() else { return };
        let session = new_session(60);

        let key = store.create(session.clone()).await.unwrap();
        let loaded = store.load(&key).await.unwrap().unwrap();
        assert_eq!(loaded.user_id, session.user_id);

        store.delete(&key).await.unwrap();
        assert_eq!(store.load(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_expires_with_ttl() {
        let Some(store) = setup_store() else { return };

        let key = store.create(new_session(1)).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;

        assert_eq!(store.load(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_unknown_session_is_noop() {
        let Some(store) = setup_store() else { return };
        assert!(store.delete("does-not-exist").await.is_ok());
    }
}

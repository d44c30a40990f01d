use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub user_id: Uuid,
    pub remember: bool,
    pub ttl_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: Uuid,
    pub remember: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Invalid session lifetime")]
    InvalidTtl,

    #[error("Session storage error: {0}")]
    StorageError(String),
}

/// Server-side sessions keyed by an opaque session key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists the session and returns the raw key to hand to the client.
    async fn create(&self, session: NewSession) -> Result<String, SessionStoreError>;
    async fn load(&self, session_key: &str) -> Result<Option<SessionRecord>, SessionStoreError>;
    async fn delete(&self, session_key: &str) -> Result<(), SessionStoreError>;
}

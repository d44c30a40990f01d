use chrono::Utc;
use std::sync::Arc;

use crate::accounts::application::domain::User;
use crate::accounts::application::ports::outgoing::{SessionRecord, SessionStore, UserQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session store error: {0}")]
    Store(String),

    #[error("User lookup failed: {0}")]
    Query(String),
}

#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub session_key: String,
    pub record: SessionRecord,
    pub user: User,
}

/// Turns a session key from the cookie into the signed-in user.
#[derive(Clone)]
pub struct SessionResolver {
    session_store: Arc<dyn SessionStore + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl SessionResolver {
    pub fn new(
        session_store: Arc<dyn SessionStore + Send + Sync>,
        user_query: Arc<dyn UserQuery + Send + Sync>,
    ) -> Self {
        Self {
            session_store,
            user_query,
        }
    }

    pub async fn resolve(
        &self,
        session_key: &str,
    ) -> Result<Option<ResolvedSession>, ResolveSessionError> {
        let Some(record) = self
            .session_store
            .load(session_key)
            .await
            .map_err(|e| ResolveSessionError::Store(e.to_string()))?
        else {
            return Ok(None);
        };

        if record.expires_at <= Utc::now() {
            self.discard(session_key).await;
            return Ok(None);
        }

        let user = self
            .user_query
            .find_by_id(record.user_id)
            .await
            .map_err(|e| ResolveSessionError::Query(e.to_string()))?;

        match user {
            Some(user) => Ok(Some(ResolvedSession {
                session_key: session_key.to_string(),
                record,
                user,
            })),
            None => {
                tracing::warn!(user_id = %record.user_id, "Session points at a missing user");
                self.discard(session_key).await;
                Ok(None)
            }
        }
    }

    async fn discard(&self, session_key: &str) {
        if let Err(e) = self.session_store.delete(session_key).await {
            tracing::warn!(error = %e, "Failed to discard stale session");
        }
    }
}

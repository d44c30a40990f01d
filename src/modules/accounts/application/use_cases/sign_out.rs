use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::outgoing::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignOutError {
    #[error("Session store error: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait ISignOutUseCase: Send + Sync {
    async fn execute(&self, session_key: &str) -> Result<(), SignOutError>;
}

pub struct SignOutUseCase {
    sessions: Arc<dyn SessionStore + Send + Sync>,
}

impl SignOutUseCase {
    pub fn new(sessions: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ISignOutUseCase for SignOutUseCase {
    async fn execute(&self, session_key: &str) -> Result<(), SignOutError> {
        self.sessions
            .delete(session_key)
            .await
            .map_err(|e| SignOutError::SessionError(e.to_string()))?;

        tracing::info!("Session terminated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::ports::outgoing::SessionStoreError;
    use crate::tests::support::mocks::MockSessionStore;

    #[tokio::test]
    async fn test_sign_out_deletes_session() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_delete()
            .times(1)
            .returning(|key| {
                assert_eq!(key, "raw-key");
                Ok(())
            });

        let result = SignOutUseCase::new(Arc::new(sessions))
            .execute("raw-key")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_delete()
            .returning(|_| Err(SessionStoreError::StorageError("redis down".to_string())));

        let result = SignOutUseCase::new(Arc::new(sessions))
            .execute("raw-key")
            .await;

        assert!(matches!(result, Err(SignOutError::SessionError(_))));
    }
}

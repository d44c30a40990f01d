use std::sync::Arc;

use crate::accounts::application::domain::User;
use crate::accounts::application::ports::outgoing::{HashError, PasswordHasher, UserQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveCredentialsError {
    #[error("User lookup failed: {0}")]
    QueryFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Finds the user whose email OR username equals the login identifier and
/// checks the password. Does not look at `is_active`.
#[derive(Clone)]
pub struct CredentialResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl CredentialResolver {
    pub fn new(
        user_query: Arc<dyn UserQuery + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
        }
    }

    /// `Ok(None)` covers both an unknown identifier and a wrong password.
    pub async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<User>, ResolveCredentialsError> {
        let user = match self
            .user_query
            .find_by_login(login)
            .await
            .map_err(|e| ResolveCredentialsError::QueryFailed(e.to_string()))?
        {
            Some(user) => user,
            None => {
                tracing::debug!("No user matches the login identifier");
                return Ok(None);
            }
        };

        let Some(hash) = user.password_hash.as_deref().filter(|h| !h.is_empty()) else {
            tracing::debug!(user_id = %user.id, "User has an unusable password");
            return Ok(None);
        };

        match self.password_hasher.verify_password(password, hash).await {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(HashError::VerifyFailed) => {
                tracing::warn!(user_id = %user.id, "Stored password hash is unreadable");
                Ok(None)
            }
            Err(e) => Err(ResolveCredentialsError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::ports::outgoing::UserQueryError;
    use crate::tests::support::fixtures::inactive_user;
    use crate::tests::support::mocks::{MockPasswordHasher, MockUserQuery};

    fn resolver(query: MockUserQuery, hasher: MockPasswordHasher) -> CredentialResolver {
        CredentialResolver::new(Arc::new(query), Arc::new(hasher))
    }

    fn query_returning(user: Option<User>) -> MockUserQuery {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_login()
            .times(1)
            .returning(move |_| Ok(user.clone()));
        query
    }

    fn hasher_matching(expected: &'static str) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify_password()
            .returning(move |password, _| Ok(password == expected));
        hasher
    }

    #[tokio::test]
    async fn test_authenticates_by_email() {
        let user = inactive_user();
        let mut query = MockUserQuery::new();
        let expected = user.clone();
        query
            .expect_find_by_login()
            .times(1)
            .returning(move |login| {
                assert_eq!(login, "new@x.com");
                Ok(Some(expected.clone()))
            });

        let result = resolver(query, hasher_matching("Abc123@1"))
            .authenticate("new@x.com", "Abc123@1")
            .await
            .unwrap();

        assert_eq!(result, Some(user));
    }

    #[tokio::test]
    async fn test_authenticates_by_username() {
        let user = inactive_user();
        let username = user.username.clone().unwrap();

        let result = resolver(query_returning(Some(user.clone())), hasher_matching("Abc123@1"))
            .authenticate(&username, "Abc123@1")
            .await
            .unwrap();

        assert_eq!(result.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn test_inactive_user_is_still_resolved() {
        let user = inactive_user();
        assert!(!user.is_active);

        let result = resolver(query_returning(Some(user)), hasher_matching("Abc123@1"))
            .authenticate("new@x.com", "Abc123@1")
            .await
            .unwrap();

        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_is_none() {
        let result = resolver(
            query_returning(Some(inactive_user())),
            hasher_matching("Abc123@1"),
        )
        .authenticate("new@x.com", "Wrong@123")
        .await
        .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_unknown_login_is_none_without_hashing() {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().times(0);

        let result = resolver(query_returning(None), hasher)
            .authenticate("ghost@x.com", "Abc123@1")
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_unusable_password_never_authenticates() {
        let mut user = inactive_user();
        user.password_hash = None;

        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify_password().times(0);

        let result = resolver(query_returning(Some(user)), hasher)
            .authenticate("new@x.com", "")
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_treated_as_failure() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Err(HashError::VerifyFailed));

        let result = resolver(query_returning(Some(inactive_user())), hasher)
            .authenticate("new@x.com", "Abc123@1")
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_query_error_is_propagated() {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_login()
            .returning(|_| Err(UserQueryError::DatabaseError("timeout".to_string())));

        let result = resolver(query, MockPasswordHasher::new())
            .authenticate("new@x.com", "Abc123@1")
            .await;

        assert!(matches!(
            result,
            Err(ResolveCredentialsError::QueryFailed(msg)) if msg.contains("timeout")
        ));
    }

    #[tokio::test]
    async fn test_hashing_task_failure_is_propagated() {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify_password()
            .returning(|_, _| Err(HashError::TaskFailed));

        let result = resolver(query_returning(Some(inactive_user())), hasher)
            .authenticate("new@x.com", "Abc123@1")
            .await;

        assert!(matches!(
            result,
            Err(ResolveCredentialsError::VerificationFailed(_))
        ));
    }
}

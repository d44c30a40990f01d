use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::User;
use crate::accounts::application::helpers::uid::decode_uid;
use crate::accounts::application::ports::outgoing::{
    ActivationTokenProvider, UserQuery, UserRepository, UserRepositoryError,
};

pub const ACTIVATION_SUCCESS_MESSAGE: &str = "Congratulations! Your account is activated.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivateAccountError {
    /// Undecodable uid, unknown user and bad token all collapse into this.
    #[error("Invalid activation link.")]
    InvalidLink,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IActivateAccountUseCase: Send + Sync {
    async fn execute(&self, uidb64: &str, token: &str) -> Result<User, ActivateAccountError>;
}

pub struct ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    tokens: Arc<dyn ActivationTokenProvider + Send + Sync>,
}

impl<Q, R> ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        tokens: Arc<dyn ActivationTokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> IActivateAccountUseCase for ActivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, uidb64: &str, token: &str) -> Result<User, ActivateAccountError> {
        let Some(user_id) = decode_uid(uidb64) else {
            tracing::debug!("Activation uid could not be decoded");
            return Err(ActivateAccountError::InvalidLink);
        };

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ActivateAccountError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!(%user_id, "Activation link points at unknown user");
                ActivateAccountError::InvalidLink
            })?;

        if let Err(reason) = self.tokens.check_token(&user, token) {
            tracing::debug!(%user_id, %reason, "Activation token rejected");
            return Err(ActivateAccountError::InvalidLink);
        }

        let activated = self
            .repository
            .activate_user(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound | UserRepositoryError::AlreadyActive => {
                    ActivateAccountError::InvalidLink
                }
                other => ActivateAccountError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(%user_id, "Account activated");
        Ok(activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::helpers::uid::encode_uid;
    use crate::accounts::application::ports::outgoing::ActivationTokenError;
    use crate::tests::support::fixtures::{active_user, inactive_user};
    use crate::tests::support::mocks::{MockActivationTokens, MockUserQuery, MockUserRepository};

    fn query_returning(user: Option<User>) -> MockUserQuery {
        let mut query = MockUserQuery::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(user.clone()));
        query
    }

    fn tokens_checking(result: Result<(), ActivationTokenError>) -> MockActivationTokens {
        let mut tokens = MockActivationTokens::new();
        tokens
            .expect_check_token()
            .returning(move |_, _| result.clone());
        tokens
    }

    #[tokio::test]
    async fn test_valid_link_activates_account() {
        let user = inactive_user();
        let uid = encode_uid(user.id);

        let mut repository = MockUserRepository::new();
        repository.expect_activate_user().times(1).returning(|id| {
            Ok(User {
                id,
                ..active_user()
            })
        });

        let use_case = ActivateAccountUseCase::new(
            query_returning(Some(user.clone())),
            repository,
            Arc::new(tokens_checking(Ok(()))),
        );

        let activated = use_case.execute(&uid, "token").await.unwrap();
        assert_eq!(activated.id, user.id);
        assert!(activated.is_active);
    }

    #[tokio::test]
    async fn test_every_failure_mode_is_the_same_generic_error() {
        let user = inactive_user();

        let bad_uid = ActivateAccountUseCase::new(
            MockUserQuery::new(),
            MockUserRepository::new(),
            Arc::new(MockActivationTokens::new()),
        );
        assert_eq!(
            bad_uid.execute("%%%", "token").await,
            Err(ActivateAccountError::InvalidLink)
        );

        let unknown_user = ActivateAccountUseCase::new(
            query_returning(None),
            MockUserRepository::new(),
            Arc::new(MockActivationTokens::new()),
        );
        assert_eq!(
            unknown_user.execute(&encode_uid(user.id), "token").await,
            Err(ActivateAccountError::InvalidLink)
        );

        for reason in [
            ActivationTokenError::Expired,
            ActivationTokenError::InvalidSignature,
            ActivationTokenError::StateMismatch,
        ] {
            let mut repository = MockUserRepository::new();
            repository.expect_activate_user().times(0);

            let bad_token = ActivateAccountUseCase::new(
                query_returning(Some(user.clone())),
                repository,
                Arc::new(tokens_checking(Err(reason))),
            );
            let err = bad_token
                .execute(&encode_uid(user.id), "token")
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid activation link.");
        }
    }

    #[tokio::test]
    async fn test_user_deleted_between_lookup_and_update() {
        let user = inactive_user();
        let mut repository = MockUserRepository::new();
        repository
            .expect_activate_user()
            .returning(|_| Err(UserRepositoryError::UserNotFound));

        let use_case = ActivateAccountUseCase::new(
            query_returning(Some(user.clone())),
            repository,
            Arc::new(tokens_checking(Ok(()))),
        );

        assert_eq!(
            use_case.execute(&encode_uid(user.id), "token").await,
            Err(ActivateAccountError::InvalidLink)
        );
    }

    #[tokio::test]
    async fn test_concurrent_second_activation_is_invalid() {
        let user = inactive_user();
        let mut repository = MockUserRepository::new();
        repository
            .expect_activate_user()
            .returning(|_| Err(UserRepositoryError::AlreadyActive));

        let use_case = ActivateAccountUseCase::new(
            query_returning(Some(user.clone())),
            repository,
            Arc::new(tokens_checking(Ok(()))),
        );

        assert_eq!(
            use_case.execute(&encode_uid(user.id), "token").await,
            Err(ActivateAccountError::InvalidLink)
        );
    }

    #[tokio::test]
    async fn test_database_failure_is_not_disguised() {
        let user = inactive_user();
        let mut repository = MockUserRepository::new();
        repository
            .expect_activate_user()
            .returning(|_| Err(UserRepositoryError::DatabaseError("down".to_string())));

        let use_case = ActivateAccountUseCase::new(
            query_returning(Some(user.clone())),
            repository,
            Arc::new(tokens_checking(Ok(()))),
        );

        assert!(matches!(
            use_case.execute(&encode_uid(user.id), "token").await,
            Err(ActivateAccountError::RepositoryError(_))
        ));
    }
}

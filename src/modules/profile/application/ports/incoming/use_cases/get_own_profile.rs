use async_trait::async_trait;

use crate::accounts::application::domain::User;
use crate::profile::application::domain::ProfileView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetOwnProfileError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetOwnProfileUseCase: Send + Sync {
    /// Users without a stored profile get an empty one.
    async fn execute(&self, user: &User) -> Result<ProfileView, GetOwnProfileError>;
}

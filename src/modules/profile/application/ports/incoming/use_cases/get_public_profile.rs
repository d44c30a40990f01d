use async_trait::async_trait;

use crate::profile::application::domain::ProfileView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetPublicProfileError {
    /// Unknown username and private profile look the same to the caller.
    #[error("Profile not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPublicProfileUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<ProfileView, GetPublicProfileError>;
}

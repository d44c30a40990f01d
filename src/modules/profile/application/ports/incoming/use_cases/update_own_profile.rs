use async_trait::async_trait;

use crate::accounts::application::domain::User;
use crate::profile::application::domain::{ProfileChanges, ProfileView};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateOwnProfileError {
    #[error("You do not have permission to edit this profile.")]
    Forbidden,

    #[error("{0}")]
    Validation(FieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateOwnProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user: &User,
        changes: ProfileChanges,
    ) -> Result<ProfileView, UpdateOwnProfileError>;
}

use async_trait::async_trait;

use crate::accounts::application::domain::{Permission, User};
use crate::profile::application::domain::{ProfileChanges, ProfileView};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateOwnProfileError, UpdateOwnProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct UpdateOwnProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateOwnProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateOwnProfileUseCase for UpdateOwnProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user: &User,
        changes: ProfileChanges,
    ) -> Result<ProfileView, UpdateOwnProfileError> {
        user.actor()
            .require(Permission::EditOwnProfile)
            .map_err(|_| UpdateOwnProfileError::Forbidden)?;

        let profile = changes
            .into_profile(user.id)
            .map_err(UpdateOwnProfileError::Validation)?;

        let saved = self
            .repository
            .upsert(profile)
            .await
            .map_err(|e| UpdateOwnProfileError::RepositoryError(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(ProfileView::new(user.display_name(), saved))
    }
}

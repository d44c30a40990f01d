use async_trait::async_trait;

use crate::accounts::application::domain::User;
use crate::profile::application::domain::{Profile, ProfileView};
use crate::profile::application::ports::incoming::use_cases::{
    GetOwnProfileError, GetOwnProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct GetOwnProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetOwnProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetOwnProfileUseCase for GetOwnProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user: &User) -> Result<ProfileView, GetOwnProfileError> {
        let profile = self
            .repository
            .find_by_user_id(user.id)
            .await
            .map_err(|e| GetOwnProfileError::RepositoryError(e.to_string()))?
            .unwrap_or_else(|| Profile::empty(user.id));

        Ok(ProfileView::new(user.display_name(), profile))
    }
}

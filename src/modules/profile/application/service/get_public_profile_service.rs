use async_trait::async_trait;

use crate::accounts::application::ports::outgoing::UserQuery;
use crate::profile::application::domain::ProfileView;
use crate::profile::application::ports::incoming::use_cases::{
    GetPublicProfileError, GetPublicProfileUseCase,
};
use crate::profile::application::ports::outgoing::ProfileRepository;

pub struct GetPublicProfileService<Q, R>
where
    Q: UserQuery,
    R: ProfileRepository,
{
    users: Q,
    repository: R,
}

impl<Q, R> GetPublicProfileService<Q, R>
where
    Q: UserQuery,
    R: ProfileRepository,
{
    pub fn new(users: Q, repository: R) -> Self {
        Self { users, repository }
    }
}

#[async_trait]
impl<Q, R> GetPublicProfileUseCase for GetPublicProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<ProfileView, GetPublicProfileError> {
        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(|e| GetPublicProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetPublicProfileError::NotFound)?;

        let profile = self
            .repository
            .find_by_user_id(user.id)
            .await
            .map_err(|e| GetPublicProfileError::RepositoryError(e.to_string()))?
            .filter(|profile| profile.is_public)
            .ok_or(GetPublicProfileError::NotFound)?;

        Ok(ProfileView::new(user.display_name(), profile))
    }
}

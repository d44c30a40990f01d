use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Inserts the profile or replaces the existing one for the same user.
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError>;
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::profile::application::domain::Profile;
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

use super::sea_orm_entity::profiles::{ActiveModel, Column, Entity};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let model = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Profile::from))
    }

    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileRepositoryError> {
        let now = Utc::now();
        let model = ActiveModel {
            user_id: Set(profile.user_id),
            first_name: Set(profile.first_name),
            last_name: Set(profile.last_name),
            avatar: Set(profile.avatar),
            caption: Set(profile.caption),
            phone: Set(profile.phone),
            gender: Set(profile.gender.map(Into::into)),
            full_address: Set(profile.full_address),
            facebook_url: Set(profile.facebook_url),
            github_url: Set(profile.github_url),
            linkedin_url: Set(profile.linkedin_url),
            twitter_url: Set(profile.twitter_url),
            website_url: Set(profile.website_url),
            is_public: Set(profile.is_public),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let saved = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::FirstName,
                        Column::LastName,
                        Column::Avatar,
                        Column::Caption,
                        Column::Phone,
                        Column::Gender,
                        Column::FullAddress,
                        Column::FacebookUrl,
                        Column::GithubUrl,
                        Column::LinkedinUrl,
                        Column::TwitterUrl,
                        Column::WebsiteUrl,
                        Column::IsPublic,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(saved.into())
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::application::domain::{NewUser, User};
use crate::accounts::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::shared::db::{error_mentions, is_unique_violation};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_error(e: DbErr) -> UserRepositoryError {
        if is_unique_violation(&e) {
            if error_mentions(&e, "email") {
                return UserRepositoryError::EmailAlreadyExists;
            }
            return UserRepositoryError::UsernameAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn load(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            username: Set(Some(user.username)),
            password_hash: Set(user.password_hash),
            role: Set(user.role.into()),
            is_active: Set(user.is_active),
            is_staff: Set(user.is_staff),
            is_superuser: Set(user.is_superuser),
            last_login: NotSet,
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(inserted.into())
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let activated = UserEntity::update_many()
            .col_expr(UserColumn::IsActive, Expr::value(true))
            .col_expr(UserColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::IsActive.eq(false))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        match activated.into_iter().next() {
            Some(model) => Ok(model.into()),
            None => {
                // Lost the race to a concurrent activation, or the row is gone.
                self.load(user_id).await?;
                Err(UserRepositoryError::AlreadyActive)
            }
        }
    }

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.last_login = Set(Some(at.into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

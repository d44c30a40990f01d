use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, NewInstructorApplication,
};
use crate::instructor_application::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError,
};
use crate::shared::db::{error_mentions, is_unique_violation};

use super::sea_orm_entity::instructor_applications::{ActiveModel, Column, Entity, Status};

#[derive(Clone, Debug)]
pub struct ApplicationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ApplicationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ApplicationRepositoryError {
    ApplicationRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_error(e: DbErr) -> ApplicationRepositoryError {
    if is_unique_violation(&e) {
        if error_mentions(&e, "phone") {
            return ApplicationRepositoryError::PhoneAlreadyExists;
        }
        if error_mentions(&e, "email") {
            return ApplicationRepositoryError::EmailAlreadyExists;
        }
    }
    map_db_err(e)
}

#[async_trait]
impl ApplicationRepository for ApplicationRepositoryPostgres {
    async fn create(
        &self,
        application: NewInstructorApplication,
    ) -> Result<InstructorApplication, ApplicationRepositoryError> {
        let now = Utc::now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(application.first_name),
            last_name: Set(application.last_name),
            phone: Set(application.phone),
            gender: Set(application.gender.into()),
            email: Set(application.email),
            address: Set(application.address),
            resume: Set(application.resume),
            status: Set(Status::Pending),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_error)?;
        Ok(inserted.into())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<InstructorApplication>, ApplicationRepositoryError> {
        let mut query = Entity::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(Status::from(status)));
        }

        let models = query
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn transition(
        &self,
        id: Uuid,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::Status, Expr::value(Status::from(to)))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(Status::from(from)))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(updated.into_iter().next().map(Into::into))
    }
}

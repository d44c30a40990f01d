use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::accounts::adapter::outgoing::sea_orm_entity::users;
use crate::instructor::application::domain::{
    Education, Experience, Instructor, NewEducation, NewExperience, NewInstructor, NewSkill, Skill,
};
use crate::instructor::application::ports::outgoing::{
    InstructorRepository, InstructorRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::{educations, experiences, instructors, skills};

#[derive(Clone, Debug)]
pub struct InstructorRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InstructorRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> InstructorRepositoryError {
    InstructorRepositoryError::DatabaseError(e.to_string())
}

/// Nested inserts fail on the foreign key when the instructor is gone.
fn map_nested_insert_err(e: DbErr) -> InstructorRepositoryError {
    if is_foreign_key_violation(&e) {
        return InstructorRepositoryError::InstructorNotFound;
    }
    map_db_err(e)
}

#[async_trait]
impl InstructorRepository for InstructorRepositoryPostgres {
    async fn create(
        &self,
        instructor: NewInstructor,
    ) -> Result<Instructor, InstructorRepositoryError> {
        let now = Utc::now();
        let user_id = instructor.user_id;
        let model = instructors::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            job_title: Set(instructor.job_title),
            job_start_date: Set(instructor.job_start_date),
            job_end_date: Set(instructor.job_end_date),
            experience_year: Set(i32::from(instructor.experience_year)),
            birthdate: Set(instructor.birthdate),
            status: Set(instructor.status),
            resume: Set(instructor.resume),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let txn = self.db.begin().await.map_err(map_db_err)?;

        let inserted = match model.insert(&txn).await {
            Ok(inserted) => inserted,
            Err(e) => {
                let _ = txn.rollback().await;
                if is_unique_violation(&e) {
                    return Err(InstructorRepositoryError::AlreadyExists);
                }
                return Err(map_db_err(e));
            }
        };

        let promoted = users::Entity::update_many()
            .col_expr(users::Column::Role, Expr::value(users::Role::Instructor))
            .col_expr(users::Column::UpdatedAt, Expr::value(now.fixed_offset()))
            .filter(users::Column::Id.eq(user_id))
            .exec(&txn)
            .await;

        if let Err(e) = promoted {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Instructor>, InstructorRepositoryError> {
        let model = instructors::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Into::into))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, InstructorRepositoryError> {
        let result = instructors::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn skills(&self, instructor_id: Uuid) -> Result<Vec<Skill>, InstructorRepositoryError> {
        let models = skills::Entity::find()
            .filter(skills::Column::InstructorId.eq(instructor_id))
            .order_by_desc(skills::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn educations(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Education>, InstructorRepositoryError> {
        let models = educations::Entity::find()
            .filter(educations::Column::InstructorId.eq(instructor_id))
            .order_by_desc(educations::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn experiences(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Experience>, InstructorRepositoryError> {
        let models = experiences::Entity::find()
            .filter(experiences::Column::InstructorId.eq(instructor_id))
            .order_by_desc(experiences::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn add_skill(
        &self,
        instructor_id: Uuid,
        skill: NewSkill,
    ) -> Result<Skill, InstructorRepositoryError> {
        let now = Utc::now();
        let model = skills::ActiveModel {
            id: Set(Uuid::new_v4()),
            instructor_id: Set(instructor_id),
            name: Set(skill.name),
            level: Set(skill.level.into()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(map_nested_insert_err)?;
        Ok(inserted.into())
    }

    async fn add_education(
        &self,
        instructor_id: Uuid,
        education: NewEducation,
    ) -> Result<Education, InstructorRepositoryError> {
        let now = Utc::now();
        let model = educations::ActiveModel {
            id: Set(Uuid::new_v4()),
            instructor_id: Set(instructor_id),
            major: Set(education.major),
            degree: Set(education.degree.into()),
            institution: Set(education.institution),
            start_date: Set(education.start_date),
            end_date: Set(education.end_date),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(map_nested_insert_err)?;
        Ok(inserted.into())
    }

    async fn add_experience(
        &self,
        instructor_id: Uuid,
        experience: NewExperience,
    ) -> Result<Experience, InstructorRepositoryError> {
        let now = Utc::now();
        let model = experiences::ActiveModel {
            id: Set(Uuid::new_v4()),
            instructor_id: Set(instructor_id),
            job_title: Set(experience.job_title),
            company: Set(experience.company),
            level: Set(experience.level.into()),
            start_date: Set(experience.start_date),
            end_date: Set(experience.end_date),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = model
            .insert(&*self.db)
            .await
            .map_err(map_nested_insert_err)?;
        Ok(inserted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructor::application::domain::{Degree, SkillLevel};
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn instructor_model(user_id: Uuid) -> instructors::Model {
        let now = Utc::now();
        instructors::Model {
            id: Uuid::new_v4(),
            user_id,
            job_title: "Backend Engineer".to_string(),
            job_start_date: date(2015, 3, 1),
            job_end_date: None,
            experience_year: 9,
            birthdate: date(1990, 6, 15),
            status: true,
            resume: "instructor_resume/ada.pdf".to_string(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn new_instructor(user_id: Uuid) -> NewInstructor {
        NewInstructor {
            user_id,
            job_title: "Backend Engineer".to_string(),
            job_start_date: date(2015, 3, 1),
            job_end_date: None,
            experience_year: 9,
            birthdate: date(1990, 6, 15),
            status: true,
            resume: "instructor_resume/ada.pdf".to_string(),
        }
    }

    fn repo(db: MockDatabase) -> InstructorRepositoryPostgres {
        InstructorRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_create_maps_row_and_promotes_user() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![instructor_model(user_id)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]);

        let created = repo(db).create(new_instructor(user_id)).await.unwrap();

        assert_eq!(created.user_id, user_id);
        assert_eq!(created.experience_year, 9);
    }

    #[tokio::test]
    async fn test_create_fails_when_role_update_fails() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![instructor_model(user_id)]])
            .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())]);

        let result = repo(db).create(new_instructor(user_id)).await;

        assert!(matches!(
            result,
            Err(InstructorRepositoryError::DatabaseError(msg)) if msg.contains("connection reset")
        ));
    }

    #[tokio::test]
    async fn test_create_second_for_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Custom(
                "duplicate key value violates unique constraint \"instructors_user_id_key\""
                    .to_string(),
            ),
        ]);

        let result = repo(db).create(new_instructor(Uuid::new_v4())).await;

        assert_eq!(result, Err(InstructorRepositoryError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_row_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);
        let repo = repo(db);

        assert!(repo.delete(Uuid::new_v4()).await.unwrap());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_skill_to_missing_instructor() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Custom(
                "insert or update on table \"skills\" violates foreign key constraint \"fk_skills_instructor\""
                    .to_string(),
            ),
        ]);

        let result = repo(db)
            .add_skill(
                Uuid::new_v4(),
                NewSkill {
                    name: "Rust".to_string(),
                    level: SkillLevel::Advanced,
                },
            )
            .await;

        assert_eq!(result, Err(InstructorRepositoryError::InstructorNotFound));
    }

    #[tokio::test]
    async fn test_educations_are_mapped() {
        let instructor_id = Uuid::new_v4();
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![
            educations::Model {
                id: Uuid::new_v4(),
                instructor_id,
                major: "Computer Science".to_string(),
                degree: educations::DegreeCode::Master,
                institution: "University of Tehran".to_string(),
                start_date: date(2012, 9, 1),
                end_date: None,
                created_at: now.into(),
                updated_at: now.into(),
            },
        ]]);

        let list = repo(db).educations(instructor_id).await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].degree, Degree::Master);
        assert_eq!(list[0].end_date, None);
    }
}

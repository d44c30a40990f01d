use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::ports::outgoing::UserQuery;
use crate::instructor::application::domain::InstructorDetail;
use crate::instructor::application::ports::incoming::use_cases::{
    GetInstructorError, GetInstructorUseCase,
};
use crate::instructor::application::ports::outgoing::{
    InstructorRepository, InstructorRepositoryError,
};

pub struct GetInstructorService<R, Q>
where
    R: InstructorRepository,
    Q: UserQuery,
{
    repository: R,
    user_query: Q,
}

impl<R, Q> GetInstructorService<R, Q>
where
    R: InstructorRepository,
    Q: UserQuery,
{
    pub fn new(repository: R, user_query: Q) -> Self {
        Self {
            repository,
            user_query,
        }
    }
}

fn repo_err(e: InstructorRepositoryError) -> GetInstructorError {
    GetInstructorError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R, Q> GetInstructorUseCase for GetInstructorService<R, Q>
where
    R: InstructorRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, instructor_id: Uuid) -> Result<InstructorDetail, GetInstructorError> {
        let instructor = self
            .repository
            .find_by_id(instructor_id)
            .await
            .map_err(repo_err)?
            .ok_or(GetInstructorError::NotFound)?;

        // Users cascade to instructors; a missing user means the row is gone.
        let user = self
            .user_query
            .find_by_id(instructor.user_id)
            .await
            .map_err(|e| GetInstructorError::RepositoryError(e.to_string()))?
            .ok_or(GetInstructorError::NotFound)?;

        let skills = self.repository.skills(instructor_id).await.map_err(repo_err)?;
        let educations = self
            .repository
            .educations(instructor_id)
            .await
            .map_err(repo_err)?;
        let experiences = self
            .repository
            .experiences(instructor_id)
            .await
            .map_err(repo_err)?;

        Ok(InstructorDetail::new(
            user.display_name(),
            instructor,
            skills,
            educations,
            experiences,
        ))
    }
}

use async_trait::async_trait;

use crate::accounts::application::domain::{Actor, Permission};
use crate::accounts::application::ports::outgoing::UserQuery;
use crate::instructor::application::domain::{Instructor, InstructorForm};
use crate::instructor::application::ports::incoming::use_cases::{
    CreateInstructorError, CreateInstructorUseCase,
};
use crate::instructor::application::ports::outgoing::{
    InstructorRepository, InstructorRepositoryError,
};

/// Attaches an instructor record to an existing user and promotes the user's role.
pub struct CreateInstructorService<R, Q>
where
    R: InstructorRepository,
    Q: UserQuery,
{
    repository: R,
    user_query: Q,
}

impl<R, Q> CreateInstructorService<R, Q>
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

#[async_trait]
impl<R, Q> CreateInstructorUseCase for CreateInstructorService<R, Q>
where
    R: InstructorRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        form: InstructorForm,
    ) -> Result<Instructor, CreateInstructorError> {
        actor
            .require(Permission::ManageInstructors)
            .map_err(|_| CreateInstructorError::Forbidden)?;

        let new_instructor = form.validate().map_err(CreateInstructorError::Validation)?;

        let user = self
            .user_query
            .find_by_id(new_instructor.user_id)
            .await
            .map_err(|e| CreateInstructorError::RepositoryError(e.to_string()))?
            .ok_or(CreateInstructorError::UserNotFound)?;

        // The role promotion commits together with the insert.
        let instructor = self
            .repository
            .create(new_instructor)
            .await
            .map_err(|e| match e {
                InstructorRepositoryError::AlreadyExists => CreateInstructorError::AlreadyInstructor,
                other => CreateInstructorError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            instructor_id = %instructor.id,
            user_id = %user.id,
            created_by = %actor.user_id,
            "Instructor created"
        );
        Ok(instructor)
    }
}

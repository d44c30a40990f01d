use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::{Actor, Permission};
use crate::instructor::application::ports::incoming::use_cases::{
    DeleteInstructorError, DeleteInstructorUseCase,
};
use crate::instructor::application::ports::outgoing::InstructorRepository;

pub struct DeleteInstructorService<R>
where
    R: InstructorRepository,
{
    repository: R,
}

impl<R> DeleteInstructorService<R>
where
    R: InstructorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteInstructorUseCase for DeleteInstructorService<R>
where
    R: InstructorRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
    ) -> Result<(), DeleteInstructorError> {
        actor
            .require(Permission::ManageInstructors)
            .map_err(|_| DeleteInstructorError::Forbidden)?;

        let deleted = self
            .repository
            .delete(instructor_id)
            .await
            .map_err(|e| DeleteInstructorError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeleteInstructorError::NotFound);
        }

        tracing::info!(%instructor_id, deleted_by = %actor.user_id, "Instructor deleted");
        Ok(())
    }
}

use async_trait::async_trait;

use crate::accounts::application::domain::Actor;
use crate::instructor::application::domain::{Instructor, InstructorForm};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateInstructorError {
    #[error("You do not have permission to manage instructors.")]
    Forbidden,

    #[error("{0}")]
    Validation(FieldError),

    #[error("User not found")]
    UserNotFound,

    #[error("This user is already an instructor.")]
    AlreadyInstructor,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateInstructorUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        form: InstructorForm,
    ) -> Result<Instructor, CreateInstructorError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::Actor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteInstructorError {
    #[error("You do not have permission to manage instructors.")]
    Forbidden,

    #[error("Instructor not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteInstructorUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, instructor_id: Uuid)
        -> Result<(), DeleteInstructorError>;
}

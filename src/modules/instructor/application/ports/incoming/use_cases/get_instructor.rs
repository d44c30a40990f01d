use async_trait::async_trait;
use uuid::Uuid;

use crate::instructor::application::domain::InstructorDetail;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetInstructorError {
    #[error("Instructor not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetInstructorUseCase: Send + Sync {
    async fn execute(&self, instructor_id: Uuid) -> Result<InstructorDetail, GetInstructorError>;
}

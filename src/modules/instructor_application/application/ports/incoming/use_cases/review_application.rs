use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::Actor;
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, ReviewDecision,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewApplicationError {
    #[error("You do not have permission to review instructor applications.")]
    Forbidden,

    #[error("Instructor application not found")]
    NotFound,

    #[error("Application is already {0}")]
    NotPending(ApplicationStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReviewApplicationUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        application_id: Uuid,
        decision: ReviewDecision,
    ) -> Result<InstructorApplication, ReviewApplicationError>;
}

use async_trait::async_trait;

use crate::accounts::application::domain::Actor;
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListApplicationsError {
    #[error("You do not have permission to review instructor applications.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListApplicationsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<InstructorApplication>, ListApplicationsError>;
}

use async_trait::async_trait;

use crate::instructor_application::application::domain::{ApplicationForm, InstructorApplication};
use crate::shared::validation::FieldError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitApplicationError {
    #[error("{0}")]
    Validation(FieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitApplicationUseCase: Send + Sync {
    async fn execute(
        &self,
        form: ApplicationForm,
    ) -> Result<InstructorApplication, SubmitApplicationError>;
}

use async_trait::async_trait;

use crate::instructor_application::application::domain::{ApplicationForm, InstructorApplication};
use crate::instructor_application::application::ports::incoming::use_cases::{
    SubmitApplicationError, SubmitApplicationUseCase,
};
use crate::instructor_application::application::ports::outgoing::{
    ApplicationRepository, ApplicationRepositoryError,
};
use crate::shared::validation::FieldError;

pub struct SubmitApplicationService<R>
where
    R: ApplicationRepository,
{
    repository: R,
}

impl<R> SubmitApplicationService<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitApplicationUseCase for SubmitApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: ApplicationForm,
    ) -> Result<InstructorApplication, SubmitApplicationError> {
        let application = form.validate().map_err(SubmitApplicationError::Validation)?;

        let created = self
            .repository
            .create(application)
            .await
            .map_err(|e| match e {
                ApplicationRepositoryError::PhoneAlreadyExists => {
                    SubmitApplicationError::Validation(FieldError::new(
                        "phone",
                        "Instructor application with this phone already exists.",
                    ))
                }
                ApplicationRepositoryError::EmailAlreadyExists => {
                    SubmitApplicationError::Validation(FieldError::new(
                        "email",
                        "Instructor application with this email already exists.",
                    ))
                }
                ApplicationRepositoryError::DatabaseError(msg) => {
                    SubmitApplicationError::RepositoryError(msg)
                }
            })?;

        tracing::info!(application_id = %created.id, "Instructor application submitted");
        Ok(created)
    }
}

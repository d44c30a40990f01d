use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::{Actor, Permission};
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, ReviewDecision,
};
use crate::instructor_application::application::ports::incoming::use_cases::{
    ReviewApplicationError, ReviewApplicationUseCase,
};
use crate::instructor_application::application::ports::outgoing::ApplicationRepository;

pub struct ReviewApplicationService<R>
where
    R: ApplicationRepository,
{
    repository: R,
}

impl<R> ReviewApplicationService<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReviewApplicationUseCase for ReviewApplicationService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        application_id: Uuid,
        decision: ReviewDecision,
    ) -> Result<InstructorApplication, ReviewApplicationError> {
        actor
            .require(Permission::ReviewInstructorApplications)
            .map_err(|_| ReviewApplicationError::Forbidden)?;

        let current = self
            .repository
            .find_by_id(application_id)
            .await
            .map_err(|e| ReviewApplicationError::RepositoryError(e.to_string()))?
            .ok_or(ReviewApplicationError::NotFound)?;

        let target = current
            .can_transition_to(decision)
            .map_err(ReviewApplicationError::NotPending)?;

        let reviewed = self
            .repository
            .transition(application_id, ApplicationStatus::Pending, target)
            .await
            .map_err(|e| ReviewApplicationError::RepositoryError(e.to_string()))?;

        match reviewed {
            Some(application) => {
                tracing::info!(
                    %application_id,
                    reviewer = %actor.user_id,
                    status = %application.status,
                    "Instructor application reviewed"
                );
                Ok(application)
            }
            // Someone else decided it between our read and write.
            None => {
                let status = self
                    .repository
                    .find_by_id(application_id)
                    .await
                    .map_err(|e| ReviewApplicationError::RepositoryError(e.to_string()))?
                    .map(|a| a.status)
                    .ok_or(ReviewApplicationError::NotFound)?;
                Err(ReviewApplicationError::NotPending(status))
            }
        }
    }
}

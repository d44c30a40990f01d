use async_trait::async_trait;

use crate::accounts::application::domain::{Actor, Permission};
use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication,
};
use crate::instructor_application::application::ports::incoming::use_cases::{
    ListApplicationsError, ListApplicationsUseCase,
};
use crate::instructor_application::application::ports::outgoing::ApplicationRepository;

pub struct ListApplicationsService<R>
where
    R: ApplicationRepository,
{
    repository: R,
}

impl<R> ListApplicationsService<R>
where
    R: ApplicationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListApplicationsUseCase for ListApplicationsService<R>
where
    R: ApplicationRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<InstructorApplication>, ListApplicationsError> {
        actor
            .require(Permission::ReviewInstructorApplications)
            .map_err(|_| ListApplicationsError::Forbidden)?;

        self.repository
            .list(status)
            .await
            .map_err(|e| ListApplicationsError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication, NewInstructorApplication,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationRepositoryError {
    #[error("An application with this phone already exists")]
    PhoneAlreadyExists,

    #[error("An application with this email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create(
        &self,
        application: NewInstructorApplication,
    ) -> Result<InstructorApplication, ApplicationRepositoryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError>;

    /// Most recently updated first.
    async fn list(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<InstructorApplication>, ApplicationRepositoryError>;

    /// Moves the application from `from` to `to`. `None` when it is no longer in `from`.
    async fn transition(
        &self,
        id: Uuid,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<Option<InstructorApplication>, ApplicationRepositoryError>;
}

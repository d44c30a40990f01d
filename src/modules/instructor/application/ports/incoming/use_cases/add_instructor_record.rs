use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::Actor;
use crate::instructor::application::domain::{
    Education, EducationForm, Experience, ExperienceForm, Skill, SkillForm,
};
use crate::shared::validation::FieldError;

/// Shared by the skill, education and experience workflows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddRecordError {
    #[error("You do not have permission to manage instructors.")]
    Forbidden,

    #[error("{0}")]
    Validation(FieldError),

    #[error("Instructor not found")]
    InstructorNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddSkillUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: SkillForm,
    ) -> Result<Skill, AddRecordError>;
}

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: EducationForm,
    ) -> Result<Education, AddRecordError>;
}

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: ExperienceForm,
    ) -> Result<Experience, AddRecordError>;
}

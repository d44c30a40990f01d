use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::{Actor, Permission};
use crate::instructor::application::domain::{
    Education, EducationForm, Experience, ExperienceForm, Skill, SkillForm,
};
use crate::instructor::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, AddRecordError, AddSkillUseCase,
};
use crate::instructor::application::ports::outgoing::{
    InstructorRepository, InstructorRepositoryError,
};

/// Adds skills, educations and experiences to an existing instructor.
pub struct AddInstructorRecordService<R>
where
    R: InstructorRepository,
{
    repository: R,
}

impl<R> AddInstructorRecordService<R>
where
    R: InstructorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn authorize(actor: &Actor) -> Result<(), AddRecordError> {
    actor
        .require(Permission::ManageInstructors)
        .map_err(|_| AddRecordError::Forbidden)
}

fn map_repo_err(e: InstructorRepositoryError) -> AddRecordError {
    match e {
        InstructorRepositoryError::InstructorNotFound => AddRecordError::InstructorNotFound,
        other => AddRecordError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> AddSkillUseCase for AddInstructorRecordService<R>
where
    R: InstructorRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: SkillForm,
    ) -> Result<Skill, AddRecordError> {
        authorize(actor)?;
        let skill = form.validate().map_err(AddRecordError::Validation)?;

        self.repository
            .add_skill(instructor_id, skill)
            .await
            .map_err(map_repo_err)
    }
}

#[async_trait]
impl<R> AddEducationUseCase for AddInstructorRecordService<R>
where
    R: InstructorRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: EducationForm,
    ) -> Result<Education, AddRecordError> {
        authorize(actor)?;
        let education = form.validate().map_err(AddRecordError::Validation)?;

        self.repository
            .add_education(instructor_id, education)
            .await
            .map_err(map_repo_err)
    }
}

#[async_trait]
impl<R> AddExperienceUseCase for AddInstructorRecordService<R>
where
    R: InstructorRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: &Actor,
        instructor_id: Uuid,
        form: ExperienceForm,
    ) -> Result<Experience, AddRecordError> {
        authorize(actor)?;
        let experience = form.validate().map_err(AddRecordError::Validation)?;

        self.repository
            .add_experience(instructor_id, experience)
            .await
            .map_err(map_repo_err)
    }
}

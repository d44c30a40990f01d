use async_trait::async_trait;
use uuid::Uuid;

use crate::instructor::application::domain::{
    Education, Experience, Instructor, NewEducation, NewExperience, NewInstructor, NewSkill, Skill,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstructorRepositoryError {
    #[error("User already has an instructor record")]
    AlreadyExists,

    #[error("Instructor not found")]
    InstructorNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// Inserts the instructor and promotes its user to the instructor role atomically.
    async fn create(&self, instructor: NewInstructor)
        -> Result<Instructor, InstructorRepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Instructor>, InstructorRepositoryError>;

    /// Removes the instructor and every nested record. Returns false when nothing matched.
    async fn delete(&self, id: Uuid) -> Result<bool, InstructorRepositoryError>;

    async fn skills(&self, instructor_id: Uuid) -> Result<Vec<Skill>, InstructorRepositoryError>;
    async fn educations(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Education>, InstructorRepositoryError>;
    async fn experiences(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Experience>, InstructorRepositoryError>;

    async fn add_skill(
        &self,
        instructor_id: Uuid,
        skill: NewSkill,
    ) -> Result<Skill, InstructorRepositoryError>;
    async fn add_education(
        &self,
        instructor_id: Uuid,
        education: NewEducation,
    ) -> Result<Education, InstructorRepositoryError>;
    async fn add_experience(
        &self,
        instructor_id: Uuid,
        experience: NewExperience,
    ) -> Result<Experience, InstructorRepositoryError>;
}

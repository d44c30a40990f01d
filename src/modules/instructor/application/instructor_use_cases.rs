use std::sync::Arc;

use crate::instructor::application::ports::incoming::use_cases::{
    AddEducationUseCase, AddExperienceUseCase, AddSkillUseCase, CreateInstructorUseCase,
    DeleteInstructorUseCase, GetInstructorUseCase,
};

#[derive(Clone)]
pub struct InstructorUseCases {
    pub create: Arc<dyn CreateInstructorUseCase + Send + Sync>,
    pub get: Arc<dyn GetInstructorUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteInstructorUseCase + Send + Sync>,
    pub add_skill: Arc<dyn AddSkillUseCase + Send + Sync>,
    pub add_education: Arc<dyn AddEducationUseCase + Send + Sync>,
    pub add_experience: Arc<dyn AddExperienceUseCase + Send + Sync>,
}

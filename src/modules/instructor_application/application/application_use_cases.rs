use std::sync::Arc;

use crate::instructor_application::application::ports::incoming::use_cases::{
    ListApplicationsUseCase, ReviewApplicationUseCase, SubmitApplicationUseCase,
};

#[derive(Clone)]
pub struct InstructorApplicationUseCases {
    pub submit: Arc<dyn SubmitApplicationUseCase + Send + Sync>,
    pub list: Arc<dyn ListApplicationsUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewApplicationUseCase + Send + Sync>,
}

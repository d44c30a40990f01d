use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    GetOwnProfileUseCase, GetPublicProfileUseCase, UpdateOwnProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get_own: Arc<dyn GetOwnProfileUseCase + Send + Sync>,
    pub update_own: Arc<dyn UpdateOwnProfileUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
}

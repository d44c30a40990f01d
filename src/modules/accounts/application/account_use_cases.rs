use std::sync::Arc;

use crate::accounts::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::accounts::application::use_cases::{
    activate_account::IActivateAccountUseCase, resend_activation::IResendActivationUseCase,
    sign_in::ISignInUseCase, sign_out::ISignOutUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub sign_in: Arc<dyn ISignInUseCase + Send + Sync>,
    pub sign_out: Arc<dyn ISignOutUseCase + Send + Sync>,
    pub activate: Arc<dyn IActivateAccountUseCase + Send + Sync>,
    pub resend_activation: Arc<dyn IResendActivationUseCase + Send + Sync>,
}

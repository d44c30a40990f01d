use async_trait::async_trait;

use crate::accounts::application::domain::User;
use crate::shared::request_context::RequestContext;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountEmailError {
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait]
pub trait AccountEmailNotifier: Send + Sync {
    async fn send_activation_email(
        &self,
        user: &User,
        ctx: &RequestContext,
    ) -> Result<(), AccountEmailError>;
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::ports::outgoing::UserQuery;
use crate::email::application::ports::outgoing::AccountEmailNotifier;
use crate::shared::request_context::RequestContext;
use crate::shared::validation::{normalize_email, FieldError};

pub const EMAIL_NOT_FOUND_MESSAGE: &str = "Email not exists.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendActivationOutcome {
    Sent,
    AlreadyActive,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResendActivationError {
    #[error("{0}")]
    Validation(FieldError),

    #[error("User lookup failed: {0}")]
    QueryError(String),

    #[error("Activation email could not be sent: {0}")]
    EmailFailed(String),
}

#[async_trait]
pub trait IResendActivationUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        ctx: &RequestContext,
    ) -> Result<ResendActivationOutcome, ResendActivationError>;
}

/// Sends a fresh activation email and waits for the delivery result.
pub struct ResendActivationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    notifier: Arc<dyn AccountEmailNotifier + Send + Sync>,
}

impl<Q> ResendActivationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q, notifier: Arc<dyn AccountEmailNotifier + Send + Sync>) -> Self {
        Self { query, notifier }
    }
}

#[async_trait]
impl<Q> IResendActivationUseCase for ResendActivationUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        ctx: &RequestContext,
    ) -> Result<ResendActivationOutcome, ResendActivationError> {
        let email = normalize_email("email", email).map_err(ResendActivationError::Validation)?;

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ResendActivationError::QueryError(e.to_string()))?
            .ok_or_else(|| {
                ResendActivationError::Validation(FieldError::new(
                    "email",
                    EMAIL_NOT_FOUND_MESSAGE,
                ))
            })?;

        if user.is_active {
            tracing::debug!(user_id = %user.id, "Resend requested for an active account");
            return Ok(ResendActivationOutcome::AlreadyActive);
        }

        self.notifier
            .send_activation_email(&user, ctx)
            .await
            .map_err(|e| ResendActivationError::EmailFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Activation email re-sent");
        Ok(ResendActivationOutcome::Sent)
    }
}

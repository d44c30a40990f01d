use std::sync::Arc;
use std::time::Duration;

use crate::accounts::application::domain::User;
use crate::accounts::application::use_cases::create_user::{
    CreateUserError, ICreateUserUseCase, RegisterUserInput,
};
use crate::email::application::ports::outgoing::AccountEmailNotifier;
use crate::shared::request_context::RequestContext;

pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Your account has been created. Please check your email to verify your account.";

const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct UserRegistrationOutput {
    pub user_id: uuid::Uuid,
    pub email: String,
    pub username: String,
    pub message: String,
}

impl From<User> for UserRegistrationOutput {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.display_name().to_string(),
            email: user.email,
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),
}

/// Creates the account, then delivers the activation email in the background.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_notifier: Arc<dyn AccountEmailNotifier + Send + Sync>,
    max_attempts: u32,
    base_delay: Duration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_notifier: Arc<dyn AccountEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_notifier,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }

    pub fn with_retry_policy(mut self, max_attempts: u32, base_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.base_delay = base_delay;
        self
    }

    /// Returns as soon as the user row exists. Delivery failures are only logged.
    pub async fn register_user(
        &self,
        input: RegisterUserInput,
        ctx: RequestContext,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let user = self.create_user_use_case.execute(input).await?;

        let notifier = self.email_notifier.clone();
        let user_for_email = user.clone();
        let max_attempts = self.max_attempts;
        let base_delay = self.base_delay;

        tokio::spawn(async move {
            for attempt in 1..=max_attempts {
                match notifier.send_activation_email(&user_for_email, &ctx).await {
                    Ok(()) => return,
                    Err(e) if attempt < max_attempts => {
                        tracing::warn!(
                            user_id = %user_for_email.id,
                            attempt,
                            max_attempts,
                            error = %e,
                            "Activation email failed, retrying"
                        );
                        tokio::time::sleep(base_delay * 2_u32.pow(attempt - 1)).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %user_for_email.id,
                            max_attempts,
                            error = %e,
                            "Giving up on activation email"
                        );
                    }
                }
            }
        });

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::application::ports::outgoing::AccountEmailError;
    use crate::shared::validation::FieldError;
    use crate::tests::support::fixtures::inactive_user;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::sync::Notify;

    #[derive(Clone)]
    struct StubCreateUser {
        result: Result<User, CreateUserError>,
    }

    #[async_trait]
    impl ICreateUserUseCase for StubCreateUser {
        async fn execute(&self, _input: RegisterUserInput) -> Result<User, CreateUserError> {
            self.result.clone()
        }
    }

    /// Fails the first `failures` calls, then succeeds.
    struct CountingNotifier {
        failures: u32,
        calls: AtomicU32,
        done: Notify,
    }

    impl CountingNotifier {
        fn new(failures: u32) -> Arc<Self> {
            Arc::new(Self {
                failures,
                calls: AtomicU32::new(0),
                done: Notify::new(),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AccountEmailNotifier for CountingNotifier {
        async fn send_activation_email(
            &self,
            _user: &User,
            _ctx: &RequestContext,
        ) -> Result<(), AccountEmailError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let result = if call <= self.failures {
                Err(AccountEmailError::EmailSendingFailed("SMTP down".to_string()))
            } else {
                Ok(())
            };
            self.done.notify_one();
            result
        }
    }

    fn input() -> RegisterUserInput {
        RegisterUserInput {
            email: "new@x.com".to_string(),
            password1: "Abc123@1".to_string(),
            password2: "Abc123@1".to_string(),
            terms_agreed: true,
        }
    }

    fn ctx() -> RequestContext {
        RequestContext::new("https", "eduport.com")
    }

    async fn wait_for_calls(notifier: &CountingNotifier, expected: u32) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while notifier.calls() < expected {
                notifier.done.notified().await;
            }
        })
        .await
        .expect("email task did not run in time");
    }

    #[tokio::test]
    async fn test_register_returns_before_email_and_sends_it() {
        let notifier = CountingNotifier::new(0);
        let orchestrator = UserRegistrationOrchestrator::new(
            Arc::new(StubCreateUser {
                result: Ok(inactive_user()),
            }),
            notifier.clone(),
        );

        let output = orchestrator.register_user(input(), ctx()).await.unwrap();

        assert_eq!(output.email, "new@x.com");
        assert_eq!(output.username, "new-1a2b3c4d");
        assert_eq!(output.message, REGISTRATION_SUCCESS_MESSAGE);

        wait_for_calls(&notifier, 1).await;
        assert_eq!(notifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_email_failure_is_retried_and_does_not_fail_registration() {
        let notifier = CountingNotifier::new(2);
        let orchestrator = UserRegistrationOrchestrator::new(
            Arc::new(StubCreateUser {
                result: Ok(inactive_user()),
            }),
            notifier.clone(),
        )
        .with_retry_policy(3, Duration::from_millis(1));

        assert!(orchestrator.register_user(input(), ctx()).await.is_ok());

        wait_for_calls(&notifier, 3).await;
        assert_eq!(notifier.calls(), 3);
    }

    #[tokio::test]
    async fn test_validation_failure_sends_no_email() {
        let notifier = CountingNotifier::new(0);
        let orchestrator = UserRegistrationOrchestrator::new(
            Arc::new(StubCreateUser {
                result: Err(CreateUserError::Validation(FieldError::new(
                    "password2",
                    "Passwords do not match.",
                ))),
            }),
            notifier.clone(),
        );

        let result = orchestrator.register_user(input(), ctx()).await;

        assert!(matches!(
            result,
            Err(UserRegistrationError::CreateUserFailed(
                CreateUserError::Validation(_)
            ))
        ));
        tokio::task::yield_now().await;
        assert_eq!(notifier.calls(), 0);
    }
}

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::accounts::application::domain::User;
use crate::accounts::application::helpers::uid::encode_uid;
use crate::accounts::application::ports::outgoing::ActivationTokenProvider;
use crate::email::application::ports::outgoing::{
    AccountEmailError, AccountEmailNotifier, EmailSender,
};
use crate::shared::request_context::RequestContext;

pub const ACTIVATION_EMAIL_SUBJECT: &str = "Please activate your account";

/// Composes and sends the account activation email.
#[derive(Clone)]
pub struct ActivationEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    tokens: Arc<dyn ActivationTokenProvider + Send + Sync>,
}

impl fmt::Debug for ActivationEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("tokens", &"<dyn ActivationTokenProvider>")
            .finish()
    }
}

impl ActivationEmailService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        tokens: Arc<dyn ActivationTokenProvider + Send + Sync>,
    ) -> Self {
        Self { sender, tokens }
    }

    pub fn activation_link(
        &self,
        user: &User,
        ctx: &RequestContext,
    ) -> Result<String, AccountEmailError> {
        let token = self
            .tokens
            .make_token(user)
            .map_err(|e| AccountEmailError::TokenGenerationFailed(e.to_string()))?;

        Ok(ctx.absolute_url(&format!(
            "/verify/activate/{}/{}/",
            encode_uid(user.id),
            token
        )))
    }

    fn render_body(name: &str, link: &str) -> String {
        format!(
            r#"
            <p>Hi {name},</p>
            <p>Thanks for signing up. Please confirm your email address to activate your account:</p>
            <p>
                <a href="{link}" style="
                    display: inline-block;
                    padding: 10px 20px;
                    background-color: #066ac9;
                    color: white;
                    text-decoration: none;
                    border-radius: 5px;
                ">Activate account</a>
            </p>
            <p>If the button does not work, copy this link into your browser:<br>{link}</p>
            <p>If you did not create an account, you can ignore this email.</p>
            "#
        )
    }
}

#[async_trait]
impl AccountEmailNotifier for ActivationEmailService {
    async fn send_activation_email(
        &self,
        user: &User,
        ctx: &RequestContext,
    ) -> Result<(), AccountEmailError> {
        let link = self.activation_link(user, ctx)?;
        let body = Self::render_body(user.display_name(), &link);

        self.sender
            .send_email(&user.email, ACTIVATION_EMAIL_SUBJECT, &body)
            .await
            .map_err(AccountEmailError::EmailSendingFailed)?;

        tracing::info!(user_id = %user.id, "Activation email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::application::ports::outgoing::ActivationTokenError;
    use crate::email::adapter::outgoing::LogEmailSender;
    use crate::tests::support::fixtures::inactive_user;
    use crate::tests::support::mocks::{MockActivationTokens, MockEmailSender};

    fn tokens_returning(token: &'static str) -> MockActivationTokens {
        let mut tokens = MockActivationTokens::new();
        tokens
            .expect_make_token()
            .returning(move |_| Ok(token.to_string()));
        tokens
    }

    fn ctx() -> RequestContext {
        RequestContext::new("https", "eduport.com")
    }

    #[test]
    fn test_activation_link_embeds_uid_and_token() {
        let user = inactive_user();
        let service = ActivationEmailService::new(
            Arc::new(LogEmailSender::new()),
            Arc::new(tokens_returning("tok.en.value")),
        );

        let link = service.activation_link(&user, &ctx()).unwrap();

        assert_eq!(
            link,
            format!(
                "https://eduport.com/verify/activate/{}/tok.en.value/",
                encode_uid(user.id)
            )
        );
    }

    #[tokio::test]
    async fn test_sends_email_to_user_with_subject_and_link() {
        let user = inactive_user();
        let sender = Arc::new(LogEmailSender::new());
        let service =
            ActivationEmailService::new(sender.clone(), Arc::new(tokens_returning("abc")));

        service.send_activation_email(&user, &ctx()).await.unwrap();

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "new@x.com");
        assert_eq!(sent[0].subject, ACTIVATION_EMAIL_SUBJECT);
        assert!(sent[0].body.contains("/verify/activate/"));
        assert!(sent[0].body.contains("new-1a2b3c4d"));
    }

    #[tokio::test]
    async fn test_token_failure_sends_nothing() {
        let mut tokens = MockActivationTokens::new();
        tokens
            .expect_make_token()
            .returning(|_| Err(ActivationTokenError::EncodingError("bad key".to_string())));

        let mut sender = MockEmailSender::new();
        sender.expect_send_email().times(0);

        let service = ActivationEmailService::new(Arc::new(sender), Arc::new(tokens));
        let result = service
            .send_activation_email(&inactive_user(), &ctx())
            .await;

        assert!(matches!(
            result,
            Err(AccountEmailError::TokenGenerationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_sender_failure_is_reported() {
        let mut sender = MockEmailSender::new();
        sender
            .expect_send_email()
            .times(1)
            .returning(|_, _, _| Err("connection refused".to_string()));

        let service = ActivationEmailService::new(Arc::new(sender), Arc::new(tokens_returning("t")));
        let result = service
            .send_activation_email(&inactive_user(), &ctx())
            .await;

        assert_eq!(
            result,
            Err(AccountEmailError::EmailSendingFailed(
                "connection refused".to_string()
            ))
        );
    }

    #[test]
    fn test_debug_hides_collaborators() {
        let service = ActivationEmailService::new(
            Arc::new(LogEmailSender::new()),
            Arc::new(MockActivationTokens::new()),
        );

        assert_eq!(
            format!("{:?}", service),
            "ActivationEmailService { sender: \"<dyn EmailSender>\", tokens: \"<dyn ActivationTokenProvider>\" }"
        );
    }
}

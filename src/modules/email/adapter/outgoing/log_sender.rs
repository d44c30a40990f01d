use crate::email::application::ports::outgoing::EmailSender;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Development sender: logs each message and keeps it in memory instead of
/// talking to an SMTP server. Selected with `EMAIL_BACKEND=log`.
#[derive(Debug, Clone, Default)]
pub struct LogEmailSender {
    sent: Arc<Mutex<Vec<SentEmail>>>,
}

impl LogEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        match self.sent.lock() {
            Ok(sent) => sent.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        tracing::info!(to = %to, subject = %subject, "Email captured by log backend");
        tracing::debug!(body = %body, "Captured email body");

        let mut sent = self.sent.lock().map_err(|e| e.to_string())?;
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

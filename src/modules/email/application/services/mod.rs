mod activation_email_service;

pub use activation_email_service::{ActivationEmailService, ACTIVATION_EMAIL_SUBJECT};

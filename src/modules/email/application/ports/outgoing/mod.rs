pub mod account_email_notifier;
pub mod email_sender;

pub use account_email_notifier::{AccountEmailError, AccountEmailNotifier};
pub use email_sender::EmailSender;

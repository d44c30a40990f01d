use crate::accounts::application::domain::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationTokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token was issued for another user")]
    UserMismatch,

    #[error("Account state changed since the token was issued")]
    StateMismatch,

    #[error("Token encoding failed: {0}")]
    EncodingError(String),
}

/// Signed, time-limited tokens bound to the current state of a user.
pub trait ActivationTokenProvider: Send + Sync {
    fn make_token(&self, user: &User) -> Result<String, ActivationTokenError>;
    fn check_token(&self, user: &User, token: &str) -> Result<(), ActivationTokenError>;
}

pub trait PasswordPolicy: Send + Sync {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least 8 characters long.")]
    TooShort,

    #[error("Ensure this value has at most 32 characters.")]
    TooLong,

    #[error("Password must contain at least one uppercase letter.")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter.")]
    MissingLowercase,

    #[error("Password must contain at least one special character (@ # $ % ! _).")]
    MissingSpecialCharacter,

    #[error(
        "Password can only contain English letters, numbers, and special characters (@ # $ % ! _)."
    )]
    InvalidCharacters,
}

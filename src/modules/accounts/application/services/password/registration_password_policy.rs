use regex::Regex;
use std::sync::LazyLock;

use crate::accounts::application::ports::incoming::{PasswordPolicy, PasswordPolicyError};

const SPECIAL_CHARACTERS: &str = "@#$%!_";
const MIN_LENGTH: usize = 8;
/// Matches the sign-in form's limit so every accepted password can be used to sign in.
pub const MAX_LENGTH: usize = 32;

static ALLOWED_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@#$%!_]+$").unwrap());

/// Rules applied to the password chosen at sign-up. Checks run in a fixed
/// order so the first failing rule is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPasswordPolicy;

impl PasswordPolicy for RegistrationPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let length = password.chars().count();
        if length < MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort);
        }
        if length > MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong);
        }

        if !password.chars().any(char::is_uppercase) {
            return Err(PasswordPolicyError::MissingUppercase);
        }

        if !password.chars().any(char::is_lowercase) {
            return Err(PasswordPolicyError::MissingLowercase);
        }

        if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            return Err(PasswordPolicyError::MissingSpecialCharacter);
        }

        if !ALLOWED_CHARSET.is_match(password) {
            return Err(PasswordPolicyError::InvalidCharacters);
        }

        Ok(())
    }
}

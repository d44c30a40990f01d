use email_address::EmailAddress;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(09)\d{9}$").unwrap());
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[A-Za-z0-9.-]+(:\d+)?(/\S*)?$").unwrap());

/// A validation failure tied to one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Trims and lower-cases a syntactically valid address.
pub fn normalize_email(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "Email is required."));
    }
    if !EmailAddress::is_valid(trimmed) {
        return Err(FieldError::new(field, "Enter a valid email address."));
    }
    Ok(trimmed.to_lowercase())
}

pub fn validate_phone(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if !PHONE_RE.is_match(trimmed) {
        return Err(FieldError::new(field, "Please enter a valid phone number."));
    }
    Ok(trimmed.to_string())
}

pub fn validate_url(field: &'static str, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if !URL_RE.is_match(trimmed) {
        return Err(FieldError::new(field, "Enter a valid URL."));
    }
    Ok(trimmed.to_string())
}

/// Required, trimmed, bounded text.
pub fn required_text(
    field: &'static str,
    raw: &str,
    max_len: usize,
) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new(field, "This field is required."));
    }
    if trimmed.chars().count() > max_len {
        return Err(FieldError::new(
            field,
            format!("Ensure this value has at most {} characters.", max_len),
        ));
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank input becomes `None`.
pub fn optional_text(
    field: &'static str,
    raw: Option<&str>,
    max_len: usize,
) -> Result<Option<String>, FieldError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => required_text(field, value, max_len).map(Some),
    }
}

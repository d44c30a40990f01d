use serde::Serialize;
use utoipa::ToSchema;

pub const ALREADY_LOGGED_IN_MESSAGE: &str = "You are already logged in!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

/// One-shot user-facing message plus where the client should go next.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notice {
    pub level: NoticeLevel,
    #[schema(example = "You're logged in!")]
    pub message: String,
    #[schema(example = "/")]
    pub redirect_to: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: &str, redirect_to: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            redirect_to: redirect_to.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormField {
    #[schema(example = "login")]
    pub name: String,
    #[schema(example = "text")]
    pub input_type: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl FormField {
    pub fn new(name: &str, input_type: &str, required: bool, max_length: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            input_type: input_type.to_string(),
            required,
            max_length,
        }
    }
}

/// Field layout of an HTML-style form, returned by the GET side of form routes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormDescriptor {
    #[schema(example = "sign_in")]
    pub form: String,
    pub fields: Vec<FormField>,
}

impl FormDescriptor {
    pub fn new(form: &str, fields: Vec<FormField>) -> Self {
        Self {
            form: form.to_string(),
            fields,
        }
    }
}

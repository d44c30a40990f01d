use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::permissions::Actor;
use crate::shared::validation::normalize_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Instructor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
        }
    }
}

/// Authentication identity. `password_hash == None` is an unusable password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }

    pub fn has_usable_password(&self) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| !hash.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }

    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.id,
            role: self.role,
            is_active: self.is_active,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
        }
    }
}

/// Explicit flags passed when creating a superuser. `None` means "use the default".
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperuserFlags {
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
}

/// Validated data for an identity that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewUserError {
    #[error("Users must have an email address.")]
    MissingEmail,

    #[error("Users must have an username.")]
    MissingUsername,

    #[error("You must provide a valid email address.")]
    InvalidEmail,

    #[error("Superuser must have password.")]
    SuperuserWithoutPassword,

    #[error("Superusers must have 'is_staff' attribute set to True.")]
    SuperuserNotStaff,

    #[error("Superusers must have 'is_superuser' attribute set to True.")]
    SuperuserFlagMissing,
}

impl NewUser {
    /// Inactive student account. A missing password hash leaves the password unusable.
    pub fn regular(
        email: &str,
        username: &str,
        password_hash: Option<String>,
    ) -> Result<Self, NewUserError> {
        let email = Self::clean_email(email)?;

        let username = username.trim();
        if username.is_empty() {
            return Err(NewUserError::MissingUsername);
        }

        Ok(Self {
            email,
            username: username.to_string(),
            password_hash,
            role: UserRole::Student,
            is_active: false,
            is_staff: false,
            is_superuser: false,
        })
    }

    pub fn superuser(
        email: &str,
        username: &str,
        password_hash: Option<String>,
        flags: SuperuserFlags,
    ) -> Result<Self, NewUserError> {
        if flags.is_staff == Some(false) {
            return Err(NewUserError::SuperuserNotStaff);
        }
        if flags.is_superuser == Some(false) {
            return Err(NewUserError::SuperuserFlagMissing);
        }

        let password_hash = password_hash.ok_or(NewUserError::SuperuserWithoutPassword)?;

        let mut user = Self::regular(email, username, Some(password_hash))?;
        user.is_active = true;
        user.is_staff = true;
        user.is_superuser = true;

        Ok(user)
    }

    fn clean_email(raw: &str) -> Result<String, NewUserError> {
        if raw.trim().is_empty() {
            return Err(NewUserError::MissingEmail);
        }
        normalize_email("email", raw).map_err(|_| NewUserError::InvalidEmail)
    }
}

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::accounts::application::domain::User;
use crate::accounts::application::helpers::CredentialResolver;
use crate::accounts::application::ports::outgoing::{NewSession, SessionStore, UserRepository};
use crate::accounts::application::services::password::PASSWORD_MAX_LENGTH;
use crate::shared::config::{self, ConfigError};
use crate::shared::validation::FieldError;

/// Lifetime of a "remember me" session: 14 days.
pub const REMEMBER_ME_TTL_SECONDS: i64 = 1_209_600;
pub const DEFAULT_BROWSER_SESSION_TTL_SECONDS: i64 = 86_400;
pub const INVALID_CREDENTIALS_MESSAGE: &str = "The username or password is incorrect";

const LOGIN_MAX_LENGTH: usize = 255;
const PASSWORD_MIN_LENGTH: usize = 8;

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());

/// Shape-checked sign-in form. Whether the credentials are right is decided later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRequest {
    login: String,
    password: String,
    remember: bool,
}

impl SignInRequest {
    pub fn new(login: &str, password: &str, remember: bool) -> Result<Self, FieldError> {
        let login = login.trim();
        if login.is_empty() {
            return Err(FieldError::new("login", "Email or Username is required."));
        }
        if login.chars().count() > LOGIN_MAX_LENGTH {
            return Err(FieldError::new(
                "login",
                format!(
                    "Ensure this value has at most {} characters.",
                    LOGIN_MAX_LENGTH
                ),
            ));
        }

        let login = if login.contains('@') {
            if !EmailAddress::is_valid(login) {
                return Err(FieldError::new("login", "Enter a valid email address."));
            }
            login.to_lowercase()
        } else {
            if !USERNAME_RE.is_match(login) {
                return Err(FieldError::new("login", "Enter a valid username."));
            }
            login.to_string()
        };

        if password.is_empty() {
            return Err(FieldError::new("password", "Password is required."));
        }
        let length = password.chars().count();
        if length > PASSWORD_MAX_LENGTH {
            return Err(FieldError::new(
                "password",
                format!(
                    "Ensure this value has at most {} characters.",
                    PASSWORD_MAX_LENGTH
                ),
            ));
        }
        if length < PASSWORD_MIN_LENGTH {
            return Err(FieldError::new(
                "password",
                format!(
                    "Password must be at least {} characters long.",
                    PASSWORD_MIN_LENGTH
                ),
            ));
        }

        Ok(Self {
            login,
            password: password.to_string(),
            remember,
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember(&self) -> bool {
        self.remember
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInPolicy {
    pub remember_ttl_seconds: i64,
    pub browser_session_ttl_seconds: i64,
    /// Refuse sign-in for accounts that have not been activated yet.
    pub require_active: bool,
}

impl Default for SignInPolicy {
    fn default() -> Self {
        Self {
            remember_ttl_seconds: REMEMBER_ME_TTL_SECONDS,
            browser_session_ttl_seconds: DEFAULT_BROWSER_SESSION_TTL_SECONDS,
            require_active: false,
        }
    }
}

impl SignInPolicy {
    pub fn from_env() -> Result<Self, ConfigError> {
        let browser_session_ttl_seconds =
            config::parse_or("SESSION_TTL", DEFAULT_BROWSER_SESSION_TTL_SECONDS)?;
        if browser_session_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            remember_ttl_seconds: REMEMBER_ME_TTL_SECONDS,
            browser_session_ttl_seconds,
            require_active: config::parse_or("AUTH_REQUIRE_ACTIVE", false)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignInOutput {
    pub session_key: String,
    /// `Some` for persistent cookies, `None` for browser-session cookies.
    pub cookie_max_age: Option<i64>,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    #[error("The username or password is incorrect")]
    InvalidCredentials,

    #[error("This account has not been activated yet.")]
    InactiveAccount,

    #[error("Credential check failed: {0}")]
    ResolverError(String),

    #[error("Session could not be created: {0}")]
    SessionError(String),
}

#[async_trait]
pub trait ISignInUseCase: Send + Sync {
    async fn execute(&self, request: SignInRequest) -> Result<SignInOutput, SignInError>;
}

pub struct SignInUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    resolver: CredentialResolver,
    sessions: Arc<dyn SessionStore + Send + Sync>,
    repository: R,
    policy: SignInPolicy,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        resolver: CredentialResolver,
        sessions: Arc<dyn SessionStore + Send + Sync>,
        repository: R,
        policy: SignInPolicy,
    ) -> Self {
        Self {
            resolver,
            sessions,
            repository,
            policy,
        }
    }
}

#[async_trait]
impl<R> ISignInUseCase for SignInUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, request: SignInRequest) -> Result<SignInOutput, SignInError> {
        let user = self
            .resolver
            .authenticate(request.login(), request.password())
            .await
            .map_err(|e| SignInError::ResolverError(e.to_string()))?
            .ok_or(SignInError::InvalidCredentials)?;

        if self.policy.require_active && !user.is_active {
            tracing::info!(user_id = %user.id, "Sign-in refused for inactive account");
            return Err(SignInError::InactiveAccount);
        }

        let ttl_seconds = if request.remember() {
            self.policy.remember_ttl_seconds
        } else {
            self.policy.browser_session_ttl_seconds
        };

        let session_key = self
            .sessions
            .create(NewSession {
                user_id: user.id,
                remember: request.remember(),
                ttl_seconds,
            })
            .await
            .map_err(|e| SignInError::SessionError(e.to_string()))?;

        // A stale last_login is not worth failing a good sign-in over.
        if let Err(e) = self.repository.record_login(user.id, Utc::now()).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        tracing::info!(user_id = %user.id, remember = request.remember(), "User signed in");

        Ok(SignInOutput {
            session_key,
            cookie_max_age: request
                .remember()
                .then_some(self.policy.remember_ttl_seconds),
            user,
        })
    }
}

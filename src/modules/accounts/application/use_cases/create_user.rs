use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::{NewUser, User};
use crate::accounts::application::ports::incoming::PasswordPolicy;
use crate::accounts::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::accounts::application::services::username::generate_username;
use crate::shared::validation::{normalize_email, FieldError};

const MAX_USERNAME_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct RegisterUserInput {
    pub email: String,
    pub password1: String,
    pub password2: String,
    pub terms_agreed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    Validation(FieldError),

    #[error("Email already exists.")]
    EmailAlreadyExists,

    /// Unique constraint hit at insert time, after the pre-check passed.
    #[error("An account with this email was created concurrently.")]
    Conflict,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<User, CreateUserError>;
}

/// Validates the sign-up form and persists an inactive student account.
#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }

    fn validate_form(&self, input: &RegisterUserInput) -> Result<String, FieldError> {
        let email = normalize_email("email", &input.email)?;

        self.password_policy
            .validate(&input.password1)
            .map_err(|e| FieldError::new("password1", e.to_string()))?;

        if input.password2.is_empty() {
            return Err(FieldError::new("password2", "Password confirmation is required."));
        }
        if input.password1 != input.password2 {
            return Err(FieldError::new("password2", "Passwords do not match."));
        }
        if !input.terms_agreed {
            return Err(FieldError::new(
                "terms_agreed",
                "You must accept the terms to register.",
            ));
        }

        Ok(email)
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: RegisterUserInput) -> Result<User, CreateUserError> {
        let email = self
            .validate_form(&input)
            .map_err(CreateUserError::Validation)?;

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password1)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            let username = generate_username(&email);
            let new_user = NewUser::regular(&email, &username, Some(password_hash.clone()))
                .map_err(|e| CreateUserError::Validation(FieldError::new("email", e.to_string())))?;

            match self.repository.create_user(new_user).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, username = %username, "User registered");
                    return Ok(user);
                }
                Err(UserRepositoryError::UsernameAlreadyExists)
                    if attempt < MAX_USERNAME_ATTEMPTS =>
                {
                    tracing::warn!(attempt, "Generated username collided, retrying");
                }
                Err(UserRepositoryError::EmailAlreadyExists) => {
                    tracing::warn!("Concurrent sign-up with the same email");
                    return Err(CreateUserError::Conflict);
                }
                Err(e) => return Err(CreateUserError::RepositoryError(e.to_string())),
            }
        }
    }
}

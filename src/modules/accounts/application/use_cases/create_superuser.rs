use async_trait::async_trait;
use std::sync::Arc;

use crate::accounts::application::domain::{NewUser, NewUserError, SuperuserFlags, User};
use crate::accounts::application::ports::outgoing::{
    PasswordHasher, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateSuperuserInput {
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub flags: SuperuserFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSuperuserError {
    #[error("{0}")]
    Invalid(#[from] NewUserError),

    #[error("Email already exists.")]
    EmailAlreadyExists,

    #[error("Username already exists.")]
    UsernameAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateSuperuserUseCase: Send + Sync {
    async fn execute(&self, input: CreateSuperuserInput) -> Result<User, CreateSuperuserError>;
}

pub struct CreateSuperuserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateSuperuserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> ICreateSuperuserUseCase for CreateSuperuserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateSuperuserInput) -> Result<User, CreateSuperuserError> {
        let password_hash = match input.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| CreateSuperuserError::HashingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let new_user =
            NewUser::superuser(&input.email, &input.username, password_hash, input.flags)?;

        let user = self
            .repository
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => CreateSuperuserError::EmailAlreadyExists,
                UserRepositoryError::UsernameAlreadyExists => {
                    CreateSuperuserError::UsernameAlreadyExists
                }
                other => CreateSuperuserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Superuser created");
        Ok(user)
    }
}

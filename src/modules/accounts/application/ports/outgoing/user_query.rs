use async_trait::async_trait;
use uuid::Uuid;

use crate::accounts::application::domain::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// First user whose email OR username equals `login`.
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserQueryError>;
}

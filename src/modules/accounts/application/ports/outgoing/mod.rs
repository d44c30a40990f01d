pub mod activation_token;
pub mod password_hasher;
pub mod session_store;
pub mod user_query;
pub mod user_repository;

pub use activation_token::{ActivationTokenError, ActivationTokenProvider};
pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{NewSession, SessionRecord, SessionStore, SessionStoreError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};

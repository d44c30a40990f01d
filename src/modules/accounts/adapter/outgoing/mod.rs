pub mod activation;
pub mod sea_orm_entity;
pub mod security;
pub mod session_store_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;

pub use activation::{ActivationTokenConfig, JwtActivationTokens};
pub use security::Argon2Hasher;
pub use session_store_redis::SessionStoreRedis;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;

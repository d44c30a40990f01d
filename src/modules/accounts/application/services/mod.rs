pub mod password;
pub mod token_hasher;
pub mod username;

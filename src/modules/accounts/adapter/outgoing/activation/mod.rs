mod activation_token_config;
mod jwt_activation_tokens;

pub use activation_token_config::{ActivationTokenConfig, DEFAULT_ACTIVATION_TOKEN_EXPIRY};
pub use jwt_activation_tokens::JwtActivationTokens;

use crate::shared::config::{self, ConfigError};

/// Three days, in seconds.
pub const DEFAULT_ACTIVATION_TOKEN_EXPIRY: i64 = 259_200;
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct ActivationTokenConfig {
    pub secret_key: String,
    pub expiry_seconds: i64,
}

impl ActivationTokenConfig {
    pub fn new(secret_key: impl Into<String>, expiry_seconds: i64) -> Result<Self, ConfigError> {
        let secret_key = secret_key.into();

        // HS256 wants at least 32 bytes of key material.
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "ACTIVATION_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }
        if expiry_seconds <= 0 {
            return Err(ConfigError::Invalid {
                key: "ACTIVATION_TOKEN_EXPIRY",
                reason: "must be positive".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            expiry_seconds,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            config::required("ACTIVATION_SECRET")?,
            config::parse_or("ACTIVATION_TOKEN_EXPIRY", DEFAULT_ACTIVATION_TOKEN_EXPIRY)?,
        )
    }
}

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::accounts::application::domain::User;
use crate::accounts::application::ports::outgoing::{
    ActivationTokenError, ActivationTokenProvider,
};
use crate::accounts::application::services::token_hasher::hash_token;

use super::activation_token_config::ActivationTokenConfig;

const TOKEN_TYPE: &str = "activation";

#[derive(Debug, Serialize, Deserialize)]
struct ActivationClaims {
    sub: Uuid,
    iat: i64,
    exp: i64,
    token_type: String,
    /// Digest of the account fields that must not change before activation.
    state: String,
}

/// HS256 activation tokens bound to the user's current state.
#[derive(Clone)]
pub struct JwtActivationTokens {
    config: ActivationTokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtActivationTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtActivationTokens")
            .field("expiry_seconds", &self.config.expiry_seconds)
            .finish()
    }
}

impl JwtActivationTokens {
    pub fn new(config: ActivationTokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn state_fingerprint(user: &User) -> String {
        let last_login = user
            .last_login
            .map(|at: DateTime<Utc>| at.timestamp_micros().to_string())
            .unwrap_or_default();

        hash_token(&format!(
            "{}|{}|{}|{}|{}",
            user.id,
            user.password_hash.as_deref().unwrap_or_default(),
            last_login,
            user.is_active,
            user.email
        ))
    }

    fn issue(&self, user: &User, now: DateTime<Utc>) -> Result<String, ActivationTokenError> {
        let claims = ActivationClaims {
            sub: user.id,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.expiry_seconds)).timestamp(),
            token_type: TOKEN_TYPE.to_string(),
            state: Self::state_fingerprint(user),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ActivationTokenError::EncodingError(e.to_string()))
    }

    fn decode_claims(&self, token: &str) -> Result<ActivationClaims, ActivationTokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<ActivationClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => ActivationTokenError::Expired,
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Activation token with invalid signature");
                        ActivationTokenError::InvalidSignature
                    }
                    _ => ActivationTokenError::Malformed,
                }
            })
    }
}

impl ActivationTokenProvider for JwtActivationTokens {
    fn make_token(&self, user: &User) -> Result<String, ActivationTokenError> {
        self.issue(user, Utc::now())
    }

    fn check_token(&self, user: &User, token: &str) -> Result<(), ActivationTokenError> {
        let claims = self.decode_claims(token)?;

        if claims.token_type != TOKEN_TYPE {
            return Err(ActivationTokenError::Malformed);
        }
        if claims.sub != user.id {
            return Err(ActivationTokenError::UserMismatch);
        }
        if claims.state != Self::state_fingerprint(user) {
            return Err(ActivationTokenError::StateMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::inactive_user;

    fn tokens() -> JwtActivationTokens {
        JwtActivationTokens::new(
            ActivationTokenConfig::new("FAKE_ACTIVATION_SECRET_DO_NOT_USE_0000", 3600).unwrap(),
        )
    }

    #[test]
    fn test_fresh_token_is_accepted() {
        let user = inactive_user();
        let tokens = tokens();

        let token = tokens.make_token(&user).unwrap();

        assert_eq!(tokens.check_token(&user, &token), Ok(()));
    }

    #[test]
    fn test_token_is_single_use() {
        let mut user = inactive_user();
        let tokens = tokens();
        let token = tokens.make_token(&user).unwrap();

        user.is_active = true;

        assert_eq!(
            tokens.check_token(&user, &token),
            Err(ActivationTokenError::StateMismatch)
        );
    }

    #[test]
    fn test_password_change_invalidates_token() {
        let mut user = inactive_user();
        let tokens = tokens();
        let token = tokens.make_token(&user).unwrap();

        user.password_hash = Some("$argon2id$v=19$something-else".to_string());

        assert_eq!(
            tokens.check_token(&user, &token),
            Err(ActivationTokenError::StateMismatch)
        );
    }

    #[test]
    fn test_token_for_other_user_is_rejected() {
        let tokens = tokens();
        let token = tokens.make_token(&inactive_user()).unwrap();

        assert_eq!(
            tokens.check_token(&inactive_user(), &token),
            Err(ActivationTokenError::UserMismatch)
        );
    }

    #[test]
    fn test_expired_token() {
        let user = inactive_user();
        let tokens = tokens();
        let token = tokens
            .issue(&user, Utc::now() - Duration::seconds(7200))
            .unwrap();

        assert_eq!(
            tokens.check_token(&user, &token),
            Err(ActivationTokenError::Expired)
        );
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let user = inactive_user();
        let other = JwtActivationTokens::new(
            ActivationTokenConfig::new("ANOTHER_SECRET_THAT_IS_LONG_ENOUGH_000", 3600).unwrap(),
        );
        let token = other.make_token(&user).unwrap();

        assert_eq!(
            tokens().check_token(&user, &token),
            Err(ActivationTokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            tokens().check_token(&inactive_user(), "not.a.jwt"),
            Err(ActivationTokenError::Malformed)
        );
    }
}

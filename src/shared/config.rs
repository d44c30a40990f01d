use std::env;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`. Returns the active environment name.
pub fn load_env_files() -> String {
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    env_name
}

pub fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

pub fn optional_or(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_missing() {
        assert_eq!(
            required("EDUPORT_TEST_NEVER_SET_KEY"),
            Err(ConfigError::Missing("EDUPORT_TEST_NEVER_SET_KEY"))
        );
    }

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        let value: i64 = parse_or("EDUPORT_TEST_UNSET_NUMBER", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_or_reports_invalid_value() {
        env::set_var("EDUPORT_TEST_BAD_NUMBER", "forty-two");
        let result: Result<i64, _> = parse_or("EDUPORT_TEST_BAD_NUMBER", 1);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "EDUPORT_TEST_BAD_NUMBER",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_or_reads_bool() {
        env::set_var("EDUPORT_TEST_FLAG", "true");
        assert!(parse_or("EDUPORT_TEST_FLAG", false).unwrap());
    }
}

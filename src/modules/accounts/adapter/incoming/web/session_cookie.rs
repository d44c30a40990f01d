use actix_web::cookie::{time::Duration, Cookie, SameSite};

use crate::shared::config::{self, ConfigError};

pub const SESSION_COOKIE_NAME: &str = "sessionid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookieConfig {
    pub name: String,
    pub secure: bool,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: SESSION_COOKIE_NAME.to_string(),
            secure: false,
        }
    }
}

impl SessionCookieConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            name: SESSION_COOKIE_NAME.to_string(),
            secure: config::parse_or("SESSION_COOKIE_SECURE", false)?,
        })
    }

    /// `max_age: None` yields a browser-session cookie.
    pub fn issue(&self, session_key: &str, max_age: Option<i64>) -> Cookie<'static> {
        let mut builder = Cookie::build(self.name.clone(), session_key.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure);

        if let Some(seconds) = max_age {
            builder = builder.max_age(Duration::seconds(seconds));
        }

        builder.finish()
    }

    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_me_cookie_is_persistent() {
        let cookie = SessionCookieConfig::default().issue("abc", Some(1_209_600));

        assert_eq!(cookie.name(), "sessionid");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.max_age(), Some(Duration::seconds(1_209_600)));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_browser_session_cookie_has_no_max_age() {
        let cookie = SessionCookieConfig::default().issue("abc", None);
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.expires(), None);
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = SessionCookieConfig {
            secure: true,
            ..SessionCookieConfig::default()
        }
        .removal();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.secure(), Some(true));
    }
}

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::shared::config::{self, ConfigError};

/// Public address of the deployment and the `Host` values it answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub scheme: String,
    pub domain: String,
    pub allowed_hosts: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            domain: "localhost:8080".to_string(),
            allowed_hosts: vec!["localhost".to_string(), "127.0.0.1".to_string()],
        }
    }
}

impl SiteConfig {
    pub fn new(scheme: &str, domain: &str, allowed_hosts: &[&str]) -> Self {
        Self {
            scheme: scheme.to_string(),
            domain: domain.to_string(),
            allowed_hosts: allowed_hosts.iter().map(|h| h.to_ascii_lowercase()).collect(),
        }
    }

    /// `ALLOWED_HOSTS` is comma separated and defaults to `SITE_DOMAIN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let scheme = config::optional_or("SITE_SCHEME", "http");
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::Invalid {
                key: "SITE_SCHEME",
                reason: format!("expected http or https, got {scheme}"),
            });
        }

        let domain = config::optional_or("SITE_DOMAIN", "localhost:8080");
        let allowed_hosts = config::optional_or("ALLOWED_HOSTS", &domain)
            .split(',')
            .map(|h| h.trim().to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();

        Ok(Self {
            scheme,
            domain,
            allowed_hosts,
        })
    }

    /// An allowed entry matches the host with or without its port.
    pub fn is_allowed(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        let bare = host.rsplit_once(':').map_or(host.as_str(), |(name, _)| name);

        self.allowed_hosts
            .iter()
            .any(|allowed| *allowed == host || allowed == bare)
    }

    /// Context for a request that arrived with `host`. Unknown hosts get the configured domain.
    pub fn context_for(&self, host: &str) -> RequestContext {
        if self.is_allowed(host) {
            RequestContext::new(self.scheme.clone(), host)
        } else {
            tracing::warn!(host = %host, "Request host is not allowed; using configured site domain");
            RequestContext::new(self.scheme.clone(), self.domain.clone())
        }
    }
}

/// Per-request values a workflow needs from the transport, passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub scheme: String,
    pub domain: String,
}

impl RequestContext {
    pub fn new(scheme: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            domain: domain.into(),
        }
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.domain, path)
    }
}

impl FromRequest for RequestContext {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let info = req.connection_info();
        let ctx = match req.app_data::<web::Data<SiteConfig>>() {
            Some(site) => site.context_for(info.host()),
            None => SiteConfig::default().context_for(info.host()),
        };
        ready(Ok(ctx))
    }
}

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::{Error, Result};

pub const DEFAULT_UPSTREAM_URL: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// Runtime settings, sourced from the environment.
///
/// - `NEWSAPI_KEY`: upstream API key. Optional here; required to serve.
/// - `NEWSDESK_BIND`: listen address, default `127.0.0.1:3000`.
/// - `NEWSDESK_SITE_URL`: public origin the page uses to reach its own
///   proxy endpoint, default `http://<bind addr>`.
/// - `NEWSDESK_UPSTREAM_URL`: top-headlines endpoint override.
#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub site_url: String,
    pub upstream_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            bind_addr: DEFAULT_BIND,
            site_url: format!("http://{DEFAULT_BIND}"),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("NEWSAPI_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(raw) = std::env::var("NEWSDESK_BIND") {
            config.set_bind_addr(raw.parse().map_err(|_| {
                Error::Config(format!("invalid NEWSDESK_BIND address: {raw}"))
            })?);
        }
        if let Ok(raw) = std::env::var("NEWSDESK_SITE_URL") {
            if !raw.is_empty() {
                config.set_site_url(&raw);
            }
        }
        if let Ok(raw) = std::env::var("NEWSDESK_UPSTREAM_URL") {
            if !raw.is_empty() {
                config.upstream_url = raw.trim_end_matches('/').to_string();
            }
        }
        Ok(config)
    }

    /// Changes the listen address and keeps the derived site URL in step.
    /// An explicit `set_site_url` afterwards still wins.
    pub fn set_bind_addr(&mut self, addr: SocketAddr) {
        self.bind_addr = addr;
        self.site_url = format!("http://{addr}");
    }

    pub fn set_site_url(&mut self, url: &str) {
        self.site_url = url.trim_end_matches('/').to_string();
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Config("NEWSAPI_KEY is not set".to_string()))
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("bind_addr", &self.bind_addr)
            .field("site_url", &self.site_url)
            .field("upstream_url", &self.upstream_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.bind_addr, DEFAULT_BIND);
        assert_eq!(config.site_url, "http://127.0.0.1:3000");
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_bind_addr_updates_site_url() {
        let mut config = AppConfig::default();
        config.set_bind_addr("0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.site_url, "http://0.0.0.0:8080");

        config.set_site_url("https://news.example.org/");
        assert_eq!(config.site_url, "https://news.example.org");
    }

    #[test]
    fn test_from_env_reads_overrides() {
        std::env::set_var("NEWSAPI_KEY", "k123");
        std::env::set_var("NEWSDESK_BIND", "127.0.0.1:4100");
        std::env::set_var("NEWSDESK_SITE_URL", "https://news.example.org/");
        std::env::set_var("NEWSDESK_UPSTREAM_URL", "http://localhost:9000/headlines/");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k123"));
        assert_eq!(config.bind_addr.port(), 4100);
        assert_eq!(config.site_url, "https://news.example.org");
        assert_eq!(config.upstream_url, "http://localhost:9000/headlines");

        std::env::remove_var("NEWSAPI_KEY");
        std::env::remove_var("NEWSDESK_BIND");
        std::env::remove_var("NEWSDESK_SITE_URL");
        std::env::remove_var("NEWSDESK_UPSTREAM_URL");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("super-secret".to_string()),
            ..AppConfig::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}

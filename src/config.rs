//! Scrape-target and server configuration.
//!
//! Nothing here is process-global: `SiteConfig` is passed into the fetcher
//! and the API state explicitly.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

/// Default origin of the scraped site.
pub const DEFAULT_ORIGIN: &str = "https://www.myinstants.com";

/// Desktop-browser User-Agent; the site may reject or alter responses for
/// generic clients.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Where and how to reach the scraped site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base origin used to resolve relative paths into absolute URLs.
    pub origin: String,
    /// User-Agent header sent on every fetch.
    pub user_agent: String,
    /// Per-fetch timeout. No retries on expiry.
    pub timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl SiteConfig {
    /// Set a custom site origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom per-fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub site: SiteConfig,
}

impl Config {
    /// Load configuration from environment variables (`.env` honored).
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let mut site = SiteConfig::default();
        if let Ok(origin) = env::var("SITE_ORIGIN") {
            site.origin = origin.trim_end_matches('/').to_string();
        }
        if let Ok(user_agent) = env::var("USER_AGENT") {
            site.user_agent = user_agent;
        }
        if let Ok(secs) = env::var("FETCH_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .context("FETCH_TIMEOUT_SECS must be a valid number")?;
            site.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            site,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_config() {
        let config = SiteConfig::default();
        assert_eq!(config.origin, "https://www.myinstants.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = SiteConfig::default()
            .with_origin("http://localhost:9999")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config.origin, "http://localhost:9999");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}

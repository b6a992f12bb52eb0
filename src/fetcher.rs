//! Upstream page fetching.
//!
//! One GET per call with a browser-like User-Agent and a fixed timeout.
//! Every failure mode (transport error, timeout, non-success status)
//! collapses into `ScrapeError::Fetch`; callers learn success or failure
//! and nothing else. No retries.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::{ScrapeError, ScrapeResult};

/// Source of upstream HTML pages.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch a page body, or fail with the single opaque fetch error.
    async fn fetch_html(&self, url: &str) -> ScrapeResult<String>;
}

/// Production fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    /// Build a fetcher for the given site configuration.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        debug!(url = %url, "fetching upstream page");

        let fetch_err = || ScrapeError::Fetch {
            url: url.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "upstream request failed");
                fetch_err()
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "upstream returned non-success status");
            return Err(fetch_err());
        }

        response.text().await.map_err(|e| {
            warn!(url = %url, error = %e, "failed to read upstream body");
            fetch_err()
        })
    }
}

/// Canned fetcher for tests: maps URLs to fixed HTML bodies.
///
/// URLs without a canned body fail with the same opaque fetch error the
/// real fetcher produces.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page (builder pattern).
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), html.into());
        self
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Fetch {
                url: url.to_string(),
            })
    }
}

//! Typed errors for the scraping library.

use thiserror::Error;

/// Errors produced while fetching or extracting an upstream page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Upstream fetch failed.
    ///
    /// Known limitation: network errors, timeouts and non-success statuses
    /// all collapse into this one variant. Callers can distinguish success
    /// from failure, not transient from permanent.
    #[error("failed to fetch upstream page: {url}")]
    Fetch { url: String },

    /// A detail page is missing an element it is never served without.
    #[error("upstream page malformed: missing {element}")]
    PageMalformed { element: &'static str },
}

/// Result type alias for scraping operations.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;

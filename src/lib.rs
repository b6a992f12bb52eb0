//! MyInstants scraping API
//!
//! Thin HTTP façade over the MyInstants website: each request fetches one
//! remote HTML page, runs an extraction pass over it, and returns the
//! extracted records as JSON. Stateless: nothing is persisted or cached,
//! and failed fetches are not retried.
//!
//! The extraction functions are plain `html -> records` passes and usable
//! without the server:
//! - listing/search/profile pages (`parse_sounds`)
//! - sound detail pages (`parse_detail`)
//! - the inline play-trigger argument list (`parse_play_args`)

pub mod api;
pub mod config;
pub mod error;
pub mod extractors;
pub mod fetcher;

pub use config::SiteConfig;
pub use error::ScrapeError;
pub use extractors::*;
pub use fetcher::{Fetch, HttpFetcher, MockFetcher};

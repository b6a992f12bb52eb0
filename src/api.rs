//! HTTP API surface.
//!
//! Seven read-only endpoints, each the same shape: read query params, build
//! the remote page URL, fetch, extract, respond with JSON. A failed fetch
//! becomes 404 with the endpoint's own message; a malformed detail page
//! becomes 502. Error bodies carry a single `detail` field.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::config::SiteConfig;
use crate::error::ScrapeError;
use crate::extractors::{parse_detail, parse_sounds, Sound, SoundDetail};
use crate::fetcher::Fetch;

/// State shared by every handler.
#[derive(Clone)]
pub struct ApiState {
    pub fetcher: Arc<dyn Fetch>,
    pub site: SiteConfig,
}

impl ApiState {
    pub fn new(fetcher: Arc<dyn Fetch>, site: SiteConfig) -> Self {
        Self { fetcher, site }
    }
}

/// Build the axum router for the API.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/trending", get(trending))
        .route("/best", get(best))
        .route("/recent", get(recent))
        .route("/favorites", get(favorites))
        .route("/uploaded", get(uploaded))
        .route("/search", get(search))
        .route("/detail", get(detail))
        .with_state(state)
}

/// JSON error response with a `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    fn bad_gateway(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

fn require_non_empty(value: &str, name: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::bad_request(format!("{name} must not be empty")));
    }
    Ok(())
}

#[derive(Deserialize)]
struct LocaleQuery {
    locale: String,
}

#[derive(Deserialize)]
struct UserQuery {
    username: String,
}

#[derive(Deserialize)]
struct SearchQuery {
    q: String,
}

#[derive(Deserialize)]
struct DetailQuery {
    id: String,
}

/// Shared body of every listing endpoint: fetch one page, extract its cards.
async fn listing(
    state: &ApiState,
    url: &str,
    not_found: &str,
) -> Result<Json<Vec<Sound>>, ApiError> {
    let html = state
        .fetcher
        .fetch_html(url)
        .await
        .map_err(|_| ApiError::not_found(not_found))?;
    Ok(Json(parse_sounds(&html, &state.site.origin)))
}

/// Currently trending sounds for a locale.
async fn trending(
    State(state): State<ApiState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<Sound>>, ApiError> {
    require_non_empty(&query.locale, "locale")?;
    let url = format!("{}/en/index/{}", state.site.origin, query.locale);
    listing(&state, &url, "Page not found").await
}

/// All-time best sounds for a locale.
async fn best(
    State(state): State<ApiState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<Sound>>, ApiError> {
    require_non_empty(&query.locale, "locale")?;
    let url = format!("{}/en/best_of_all_time/{}", state.site.origin, query.locale);
    listing(&state, &url, "Page not found").await
}

/// Most recently added sounds.
async fn recent(State(state): State<ApiState>) -> Result<Json<Vec<Sound>>, ApiError> {
    let url = format!("{}/en/recent", state.site.origin);
    listing(&state, &url, "Page not found").await
}

/// Sounds favorited by a user.
async fn favorites(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Sound>>, ApiError> {
    require_non_empty(&query.username, "username")?;
    let url = format!("{}/en/profile/{}", state.site.origin, query.username);
    listing(&state, &url, "User not found").await
}

/// Sounds uploaded by a user.
async fn uploaded(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<Sound>>, ApiError> {
    require_non_empty(&query.username, "username")?;
    let url = format!("{}/en/profile/{}/uploaded/", state.site.origin, query.username);
    listing(&state, &url, "User not found").await
}

/// Keyword search across the site.
async fn search(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Sound>>, ApiError> {
    require_non_empty(&query.q, "q")?;
    let url = search_url(&state.site.origin, &query.q);
    listing(&state, &url, "No results found").await
}

/// Build the search page URL with the query percent-encoded.
fn search_url(origin: &str, q: &str) -> String {
    match Url::parse_with_params(&format!("{origin}/en/search/"), [("name", q)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{origin}/en/search/?name={q}"),
    }
}

/// Full detail record for one sound.
async fn detail(
    State(state): State<ApiState>,
    Query(query): Query<DetailQuery>,
) -> Result<Json<SoundDetail>, ApiError> {
    require_non_empty(&query.id, "id")?;
    let url = format!("{}/en/instant/{}", state.site.origin, query.id);
    let html = state
        .fetcher
        .fetch_html(&url)
        .await
        .map_err(|_| ApiError::not_found("Sound not found"))?;

    let record = parse_detail(&html, &query.id, &state.site.origin).map_err(|e| match e {
        ScrapeError::PageMalformed { .. } => {
            tracing::warn!(url = %url, error = %e, "detail page failed to parse");
            ApiError::bad_gateway("Upstream page malformed")
        }
        ScrapeError::Fetch { .. } => ApiError::not_found("Sound not found"),
    })?;

    Ok(Json(record))
}

/// Service index: name, version and available endpoints.
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/trending": "trending sounds for a locale (?locale=us)",
            "/best": "all-time best sounds for a locale (?locale=us)",
            "/recent": "most recently added sounds",
            "/favorites": "sounds favorited by a user (?username=...)",
            "/uploaded": "sounds uploaded by a user (?username=...)",
            "/search": "search sounds by keyword (?q=...)",
            "/detail": "full record for one sound (?id=...)",
        },
    }))
}

async fn healthz() -> &'static str {
    "ok"
}

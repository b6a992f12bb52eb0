//! API server binary.

use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use myinstants_api::api::{self, ApiState};
use myinstants_api::config::Config;
use myinstants_api::fetcher::HttpFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,myinstants_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        origin = %config.site.origin,
        port = config.port,
        "starting myinstants API server"
    );

    let fetcher = Arc::new(HttpFetcher::new(&config.site));
    let router =
        api::router(ApiState::new(fetcher, config.site)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

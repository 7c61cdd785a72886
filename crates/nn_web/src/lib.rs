use axum::{routing::get, Router};
use nn_client::ApiClient;
use nn_core::Result;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod handlers;
pub mod logging;
pub mod mount;
pub mod render;
pub mod state;

pub use config::AppConfig;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/feeds", get(handlers::feeds))
        .route("/feeds/:feed_title", get(handlers::feed_articles))
        .route("/articles/:id", get(handlers::article))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Builds the API client from `config` and serves the pages until the
/// listener fails.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let client = ApiClient::new(config.api_base_url.clone())?;
    match client.base_url() {
        Some(url) => info!("🔗 Using news API at {}", url),
        None => tracing::warn!(
            "⚠️ No API base URL configured; every page will show its error state"
        ),
    }
    let app = create_app(AppState::new(Arc::new(client))?);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("🚀 Serving New News on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}


//! Mycomize Storefront Server
//!
//! Serves the built WASM frontend. Any path that does not name a file gets
//! `index.html`, which lets the browser router handle `/guides`,
//! `/order-status?...` and friends. All order and checkout traffic goes
//! straight from the browser to the storefront backend.

mod config;
mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::health_check;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    if !config.index_file().is_file() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "index.html not found, build the web crate with trunk first"
        );
    }

    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!(
        addr = %config.bind_addr,
        static_dir = %config.static_dir.display(),
        "Storefront server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(config: &ServerConfig) -> Router {
    let frontend =
        ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
}

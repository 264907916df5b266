//! Backend access for components

use leptos::prelude::*;
use mycomize_client::BackendClient;
use mycomize_core::BackendConfig;

/// Backend base URL baked in at build time
const BACKEND_URL: Option<&str> = option_env!("MYCOMIZE_BACKEND_URL");

/// Resolve the backend configuration once, at startup
pub fn backend_config() -> BackendConfig {
    let Some(url) = BACKEND_URL else {
        return BackendConfig::default();
    };
    BackendConfig::parse(url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid backend URL, using default");
        BackendConfig::default()
    })
}

/// Client bound to the configuration provided by [`crate::App`]
pub fn use_backend() -> BackendClient {
    BackendClient::new(expect_context::<BackendConfig>())
}

/// Full-page navigation away from the app
pub fn navigate_external(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window available for navigation");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        tracing::error!(url, error = ?e, "Navigation failed");
    }
}

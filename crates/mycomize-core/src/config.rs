//! Backend Configuration
//!
//! The backend base URL is resolved once and handed to whoever makes
//! requests; nothing downstream reads the environment.

use crate::error::{Result, StorefrontError};
use crate::order::OrderSubscription;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_VAR: &str = "MYCOMIZE_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Where the storefront backend lives
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Like [`BackendConfig::new`], but only accepts absolute http(s) URLs
    pub fn parse(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::new(trimmed))
        } else {
            Err(StorefrontError::Config(format!(
                "backend URL must start with http:// or https://, got '{trimmed}'"
            )))
        }
    }

    /// Read `MYCOMIZE_BACKEND_URL`, falling back to localhost
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::parse(&url).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring {BACKEND_URL_VAR}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Event stream URL for one order
    pub fn order_events_url(&self, subscription: &OrderSubscription) -> String {
        format!(
            "{}?{}={}",
            self.endpoint(subscription.method.events_path()),
            subscription.method.key_param(),
            urlencoding::encode(&subscription.key),
        )
    }

    /// Legacy invoice lookup URL
    pub fn invoice_url(&self, invoice_id: &str) -> String {
        format!(
            "{}?invoice_id={}",
            self.endpoint("invoice"),
            urlencoding::encode(invoice_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::PaymentMethod;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig::new("https://api.mycomize.com/");
        assert_eq!(config.endpoint("/checkout"), "https://api.mycomize.com/checkout");
        assert_eq!(config.endpoint("guides"), "https://api.mycomize.com/guides");
    }

    #[test]
    fn test_order_events_url() {
        let config = BackendConfig::new("https://api.mycomize.com");

        let btc = OrderSubscription::new(PaymentMethod::Btc, "xyz");
        assert_eq!(
            config.order_events_url(&btc),
            "https://api.mycomize.com/btcpay-webhook-events?invoice_id=xyz"
        );

        let stripe = OrderSubscription::new(PaymentMethod::Stripe, "cs_test a&b");
        assert_eq!(
            config.order_events_url(&stripe),
            "https://api.mycomize.com/stripe-webhook-events?session_id=cs_test%20a%26b"
        );
    }

    #[test]
    fn test_parse_requires_http_scheme() {
        let config = BackendConfig::parse(" https://api.mycomize.com/ ").unwrap();
        assert_eq!(config.base_url(), "https://api.mycomize.com");

        assert!(matches!(
            BackendConfig::parse("api.mycomize.com"),
            Err(StorefrontError::Config(_))
        ));
    }

    #[test]
    fn test_default_is_localhost() {
        assert_eq!(BackendConfig::default().base_url(), "http://localhost:8000");
    }
}

//! Backend HTTP Client
//!
//! One-shot request/response calls against the storefront backend. Works on
//! native targets and in the browser (reqwest's wasm backend).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use mycomize_core::{
    BackendConfig, CheckoutOutcome, CheckoutRequest, Guide, GuideList, OrderState, PriceQuote,
    Result, StorefrontError,
};

/// Client for the storefront backend
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from `MYCOMIZE_BACKEND_URL`
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub(crate) const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// `GET /guides`
    pub async fn list_guides(&self) -> Result<Vec<Guide>> {
        let list: GuideList = self.get_json(&self.config.endpoint("guides")).await?;
        tracing::debug!(count = list.guides.len(), "Fetched guides");
        Ok(list.guides)
    }

    /// `GET /price`, for backends that sell a single guide.
    ///
    /// Library API only: the web app reads prices from [`list_guides`](Self::list_guides).
    pub async fn get_price(&self) -> Result<PriceQuote> {
        self.get_json(&self.config.endpoint("price")).await
    }

    /// `GET /invoice?invoice_id=`, superseded by the BTC event stream
    pub async fn get_invoice(&self, invoice_id: &str) -> Result<InvoiceDetail> {
        self.get_json(&self.config.invoice_url(invoice_id)).await
    }

    /// `POST /checkout`, decoded into exactly one outcome
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutOutcome> {
        let endpoint = self.config.endpoint("checkout");
        tracing::info!(method = %request.method, guide = %request.id, "Submitting checkout");

        let response = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Checkout request rejected");
            return Err(StorefrontError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(http_error)?;
        CheckoutOutcome::from_json(&body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!(url, error = %e, "Backend request failed");
            http_error(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), "Backend returned error status");
            return Err(StorefrontError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| StorefrontError::Decode(e.to_string()))
    }
}

pub(crate) fn http_error(err: reqwest::Error) -> StorefrontError {
    StorefrontError::Http(err.to_string())
}

/// Legacy invoice lookup body
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(default)]
    pub order_state: Option<OrderState>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve;
    use axum::{extract::Query, routing::{get, post}, Json, Router};
    use mycomize_core::{BillingAddress, CheckoutFailure};
    use std::collections::HashMap;

    async fn checkout_handler(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
        match body["type"].as_str() {
            Some("stripe") => Json(serde_json::json!({
                "checkout_link": "https://checkout.stripe.com/c/pay/cs_1"
            })),
            Some("btc") if body["zipcode"].is_null() => {
                Json(serde_json::json!({"error": "error_invalid_location"}))
            }
            Some("btc") => Json(serde_json::json!({"order_state": "Fulfilled"})),
            _ => Json(serde_json::json!({"error": "error_invalid_payment_type"})),
        }
    }

    fn backend() -> Router {
        Router::new()
            .route("/checkout", post(checkout_handler))
            .route(
                "/guides",
                get(|| async {
                    Json(serde_json::json!({"guides": [{
                        "id": "fundamentals",
                        "title": "Fundamentals of Mushroom Cultivation",
                        "description": "A concise, step-by-step guide to mushroom cultivation",
                        "price": 30.0,
                        "image": "/mush1.webp"
                    }]}))
                }),
            )
            .route(
                "/invoice",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(serde_json::json!({
                        "invoice_id": params.get("invoice_id"),
                        "order_state": "Processing Payment"
                    }))
                }),
            )
    }

    #[tokio::test]
    async fn test_checkout_outcomes() {
        let client = BackendClient::new(BackendConfig::new(serve(backend()).await));

        let outcome = client
            .checkout(&CheckoutRequest::stripe("me@example.com", "fundamentals"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            CheckoutOutcome::Redirect {
                checkout_link: "https://checkout.stripe.com/c/pay/cs_1".into()
            }
        );

        let billing = BillingAddress {
            city: "Denver".into(),
            state: "CO".into(),
            zipcode: "80202".into(),
            country: "US".into(),
        };
        let outcome = client
            .checkout(&CheckoutRequest::btc("me@example.com", "fundamentals", billing))
            .await
            .unwrap();
        assert_eq!(outcome, CheckoutOutcome::StateUpdate(OrderState::Fulfilled));
    }

    #[tokio::test]
    async fn test_checkout_business_error() {
        let client = BackendClient::new(BackendConfig::new(serve(backend()).await));
        let mut request =
            CheckoutRequest::btc("me@example.com", "fundamentals", BillingAddress::default());
        request.billing = None;

        let outcome = client.checkout(&request).await.unwrap();
        assert_eq!(
            outcome,
            CheckoutOutcome::Failure(CheckoutFailure::new("error_invalid_location"))
        );
    }

    #[tokio::test]
    async fn test_list_guides_and_invoice() {
        let client = BackendClient::new(BackendConfig::new(serve(backend()).await));

        let guides = client.list_guides().await.unwrap();
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].id, "fundamentals");

        let invoice = client.get_invoice("inv 1").await.unwrap();
        assert_eq!(invoice.order_state, Some(OrderState::ProcessingPayment));
        assert_eq!(invoice.extra["invoice_id"], "inv 1");
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_status_error() {
        let client = BackendClient::new(BackendConfig::new(serve(backend()).await));
        let err = client.get_price().await.unwrap_err();
        assert!(matches!(err, StorefrontError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let client = BackendClient::new(BackendConfig::new("http://127.0.0.1:9"));
        let err = client.list_guides().await.unwrap_err();
        assert!(err.is_retryable());
    }
}

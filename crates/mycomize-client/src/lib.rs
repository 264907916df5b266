//! # mycomize-client
//!
//! Talks to the storefront backend. The request/response half
//! ([`BackendClient`]) compiles for both native and wasm32 targets; the
//! server-sent events subscriber ([`OrderWatch`]) is native-only, the browser
//! uses its own `EventSource`.
//!
//! ```rust,ignore
//! use mycomize_client::{BackendClient, OrderWatch};
//! use mycomize_core::{OrderSubscription, PaymentMethod};
//!
//! let client = BackendClient::from_env();
//! let subscription = OrderSubscription::new(PaymentMethod::Btc, "inv_123");
//! let mut watch = OrderWatch::open(&client, subscription).await?;
//! while let Some(state) = watch.next_state().await {
//!     println!("order is now {state}");
//! }
//! ```

mod client;
#[cfg(not(target_arch = "wasm32"))]
mod events;

pub use client::{BackendClient, InvoiceDetail};
#[cfg(not(target_arch = "wasm32"))]
pub use events::{MAX_LINE_BYTES, OrderWatch};

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    /// Bind an in-process backend on an ephemeral port, returning its base URL
    pub async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }
}

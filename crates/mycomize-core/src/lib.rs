//! # mycomize-core
//!
//! Domain logic for the Mycomize storefront, shared by the browser app and
//! the native client.
//!
//! ## Order status flow
//!
//! ```text
//! ┌──────────────┐  POST /checkout   ┌─────────────────┐
//! │ Checkout form│──────────────────▶│ CheckoutOutcome │── Redirect ──▶ processor
//! └──────────────┘                   └─────────────────┘
//!                                            │ StateUpdate / Failure
//!                                            ▼
//! ┌──────────────┐  {order_state}    ┌─────────────────┐   ┌────────────┐
//! │ Event stream │──────────────────▶│  OrderTracker   │──▶│ StatusView │
//! └──────────────┘                   └─────────────────┘   └────────────┘
//! ```
//!
//! Nothing here performs I/O; transports feed raw messages in and render
//! whatever [`StatusView`] comes out.

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod order;
pub mod status;
pub mod tracker;

pub use catalog::{Guide, GuideList, OrderSummary, PriceQuote};
pub use checkout::{
    BillingAddress, CheckoutFailure, CheckoutOutcome, CheckoutRequest, CheckoutStep, CheckoutView,
};
pub use config::BackendConfig;
pub use error::{Result, StorefrontError};
pub use order::{OrderState, OrderStatusQuery, OrderSubscription, PaymentMethod, ResolvedOrder};
pub use status::{StatusHeader, StatusView};
pub use tracker::{ChannelControl, OrderEvent, OrderTracker};

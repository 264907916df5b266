//! Order State and Identifiers
//!
//! The backend owns order state and pushes it as a plain string tag. The
//! client keeps a typed view of that tag but never rejects one it does not
//! recognise: unknown tags survive a round trip unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};

/// Backend-reported payment/delivery progress for a single purchase
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderState {
    /// No event received yet (`""`)
    #[default]
    Pending,
    ProcessingPayment,
    /// Payment confirmed by the processor
    Settled,
    /// Guide delivery email sent
    Fulfilled,
    Expired,
    Canceled,
    Failed,
    /// Server-reported business error, raw `error_*` tag
    Error(String),
    /// Anything else the backend might send
    Unknown(String),
}

impl OrderState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "",
            Self::ProcessingPayment => "Processing Payment",
            Self::Settled => "Settled",
            Self::Fulfilled => "Fulfilled",
            Self::Expired => "Expired",
            Self::Canceled => "Canceled",
            Self::Failed => "Failed",
            Self::Error(raw) | Self::Unknown(raw) => raw,
        }
    }

    /// No further transitions are expected once one of these arrives
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Fulfilled | Self::Expired | Self::Canceled | Self::Failed | Self::Error(_)
        )
    }

    /// Position on the Pending → Processing → Settled → terminal path.
    ///
    /// `Unknown` tags have no rank.
    pub const fn progress(&self) -> Option<u8> {
        match self {
            Self::Pending => Some(0),
            Self::ProcessingPayment => Some(1),
            Self::Settled => Some(2),
            Self::Fulfilled | Self::Expired | Self::Canceled | Self::Failed | Self::Error(_) => {
                Some(3)
            }
            Self::Unknown(_) => None,
        }
    }

    /// True when moving from `self` to `next` walks backwards
    pub fn is_regression_to(&self, next: &Self) -> bool {
        match (self.progress(), next.progress()) {
            (Some(current), Some(incoming)) => incoming < current,
            _ => false,
        }
    }
}

impl From<&str> for OrderState {
    fn from(tag: &str) -> Self {
        match tag {
            "" => Self::Pending,
            "Processing Payment" => Self::ProcessingPayment,
            "Settled" => Self::Settled,
            "Fulfilled" => Self::Fulfilled,
            "Expired" => Self::Expired,
            "Canceled" => Self::Canceled,
            "Failed" => Self::Failed,
            other if other.starts_with("error") => Self::Error(other.to_string()),
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for OrderState {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<OrderState> for String {
    fn from(state: OrderState) -> Self {
        state.as_str().to_string()
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the buyer is paying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Btc,
    Stripe,
}

impl PaymentMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Stripe => "stripe",
        }
    }

    /// Name shown to the buyer
    pub const fn label(self) -> &'static str {
        match self {
            Self::Btc => "BTC",
            Self::Stripe => "Stripe",
        }
    }

    /// Backend path of this method's order event stream
    pub const fn events_path(self) -> &'static str {
        match self {
            Self::Btc => "btcpay-webhook-events",
            Self::Stripe => "stripe-webhook-events",
        }
    }

    /// Query parameter that keys the event stream
    pub const fn key_param(self) -> &'static str {
        match self {
            Self::Btc => "invoice_id",
            Self::Stripe => "session_id",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "btc" => Ok(Self::Btc),
            "stripe" => Ok(Self::Stripe),
            other => Err(StorefrontError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one order event stream
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderSubscription {
    pub method: PaymentMethod,
    /// Invoice id (btc) or checkout session id (stripe)
    pub key: String,
}

impl OrderSubscription {
    pub fn new(method: PaymentMethod, key: impl Into<String>) -> Self {
        Self {
            method,
            key: key.into(),
        }
    }
}

/// Raw query parameters of the order-status page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderStatusQuery {
    pub payment_type: Option<String>,
    pub order_id: Option<String>,
    pub invoice_id: Option<String>,
    pub session_id: Option<String>,
}

/// Everything the status page needs once the query checks out
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOrder {
    pub method: PaymentMethod,
    pub order_id: String,
    pub subscription: OrderSubscription,
}

impl OrderStatusQuery {
    /// Collect from `(key, value)` pairs, later duplicates win
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "type" => &mut query.payment_type,
                "order_id" => &mut query.order_id,
                "invoice_id" => &mut query.invoice_id,
                "session_id" => &mut query.session_id,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        query
    }

    /// Validate presence of the method, order id and stream key
    pub fn resolve(&self) -> Result<ResolvedOrder> {
        let method: PaymentMethod = present(self.payment_type.as_deref())
            .ok_or(StorefrontError::MissingParameter("type"))?
            .parse()?;

        let order_id = present(self.order_id.as_deref())
            .ok_or(StorefrontError::MissingParameter("order_id"))?;

        let key = match method {
            PaymentMethod::Btc => present(self.invoice_id.as_deref()),
            PaymentMethod::Stripe => present(self.session_id.as_deref()),
        }
        .ok_or(StorefrontError::MissingParameter(method.key_param()))?;

        Ok(ResolvedOrder {
            method,
            order_id: order_id.to_string(),
            subscription: OrderSubscription::new(method, key),
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tags_round_trip() {
        for tag in [
            "",
            "Processing Payment",
            "Settled",
            "Fulfilled",
            "Expired",
            "Canceled",
            "Failed",
            "error_invalid_email",
            "Refunded",
        ] {
            assert_eq!(OrderState::from(tag).as_str(), tag);
        }
    }

    #[test]
    fn test_error_prefix_is_recognised() {
        assert_eq!(
            OrderState::from("error_checkout_btc"),
            OrderState::Error("error_checkout_btc".into())
        );
        assert!(matches!(OrderState::from("Refunded"), OrderState::Unknown(_)));
    }

    #[test]
    fn test_terminal_set() {
        assert!(OrderState::Fulfilled.is_terminal());
        assert!(OrderState::Expired.is_terminal());
        assert!(OrderState::Canceled.is_terminal());
        assert!(OrderState::Failed.is_terminal());
        assert!(!OrderState::Settled.is_terminal());
        assert!(!OrderState::ProcessingPayment.is_terminal());
        assert!(!OrderState::Pending.is_terminal());
    }

    #[test]
    fn test_regression_detection() {
        assert!(OrderState::Settled.is_regression_to(&OrderState::ProcessingPayment));
        assert!(!OrderState::Settled.is_regression_to(&OrderState::Fulfilled));
        assert!(!OrderState::Settled.is_regression_to(&OrderState::Unknown("x".into())));
    }

    #[test]
    fn test_state_deserializes_from_string() {
        let state: OrderState = serde_json::from_str("\"Settled\"").unwrap();
        assert_eq!(state, OrderState::Settled);
        assert_eq!(
            serde_json::to_string(&OrderState::ProcessingPayment).unwrap(),
            "\"Processing Payment\""
        );
    }

    #[test]
    fn test_resolve_btc_query() {
        let query = OrderStatusQuery::from_pairs([
            ("type", "btc"),
            ("order_id", "abc"),
            ("invoice_id", "xyz"),
        ]);
        let resolved = query.resolve().unwrap();
        assert_eq!(resolved.method, PaymentMethod::Btc);
        assert_eq!(resolved.order_id, "abc");
        assert_eq!(resolved.subscription, OrderSubscription::new(PaymentMethod::Btc, "xyz"));
    }

    #[test]
    fn test_resolve_requires_method_key() {
        let query = OrderStatusQuery::from_pairs([
            ("type", "stripe"),
            ("order_id", "abc"),
            ("invoice_id", "xyz"),
        ]);
        assert!(matches!(
            query.resolve(),
            Err(StorefrontError::MissingParameter("session_id"))
        ));
    }

    #[test]
    fn test_resolve_rejects_blank_and_unknown() {
        let blank = OrderStatusQuery::from_pairs([
            ("type", "btc"),
            ("order_id", "  "),
            ("invoice_id", "x"),
        ]);
        assert!(matches!(
            blank.resolve(),
            Err(StorefrontError::MissingParameter("order_id"))
        ));

        let bogus = OrderStatusQuery::from_pairs([("type", "paypal"), ("order_id", "a")]);
        assert!(matches!(bogus.resolve(), Err(StorefrontError::InvalidPaymentMethod(_))));

        assert!(matches!(
            OrderStatusQuery::default().resolve(),
            Err(StorefrontError::MissingParameter("type"))
        ));
    }
}

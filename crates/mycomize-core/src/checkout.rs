//! Checkout Submission
//!
//! The backend answers `POST /checkout` with exactly one of
//! `{checkout_link}`, `{order_state}` or `{error}`. The body is decoded once,
//! here, into [`CheckoutOutcome`]; callers never inspect raw fields.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};
use crate::order::{OrderState, PaymentMethod};

/// Billing address, used by the backend for sales tax on BTC orders
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
}

/// `POST /checkout` body
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub email: String,
    #[serde(rename = "type")]
    pub method: PaymentMethod,
    /// Guide id
    pub id: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,
}

impl CheckoutRequest {
    /// Card checkout; Stripe collects the address itself
    pub fn stripe(email: impl Into<String>, guide_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            method: PaymentMethod::Stripe,
            id: guide_id.into(),
            billing: None,
        }
    }

    pub fn btc(
        email: impl Into<String>,
        guide_id: impl Into<String>,
        billing: BillingAddress,
    ) -> Self {
        Self {
            email: email.into(),
            method: PaymentMethod::Btc,
            id: guide_id.into(),
            billing: Some(billing),
        }
    }
}

/// Server-reported business error (`error_*` tag)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutFailure {
    pub tag: String,
}

impl CheckoutFailure {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Tag with underscores as spaces and the leading `error` token dropped
    pub fn message(&self) -> String {
        deslugify_error(&self.tag)
    }
}

/// `error_invalid_email` → `invalid email`
pub fn deslugify_error(tag: &str) -> String {
    let spaced = tag.replace('_', " ");
    let trimmed = spaced.trim_start();
    let rest = trimmed
        .strip_prefix("error")
        .filter(|rest| rest.is_empty() || rest.starts_with([' ', ':']))
        .unwrap_or(trimmed);
    rest.trim_start_matches(':').trim().to_string()
}

/// Decoded `POST /checkout` response
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Leave the site for the processor's hosted page
    Redirect { checkout_link: String },
    /// An order for this email already exists in this state
    StateUpdate(OrderState),
    Failure(CheckoutFailure),
}

#[derive(Deserialize)]
struct RawCheckoutResponse {
    #[serde(default)]
    checkout_link: Option<String>,
    #[serde(default)]
    order_state: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl CheckoutOutcome {
    /// Decode a response body. Exactly one known field must be present.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: RawCheckoutResponse =
            serde_json::from_str(body).map_err(|e| StorefrontError::Decode(e.to_string()))?;

        match (raw.checkout_link, raw.order_state, raw.error) {
            (Some(checkout_link), None, None) => Ok(Self::Redirect { checkout_link }),
            (None, Some(state), None) => Ok(Self::StateUpdate(OrderState::from(state))),
            (None, None, Some(tag)) => Ok(Self::Failure(CheckoutFailure::new(tag))),
            (None, None, None) => Err(StorefrontError::UnexpectedResponse(
                "checkout response has no checkout_link, order_state or error".into(),
            )),
            (link, state, error) => {
                let fields: Vec<&str> = [
                    link.map(|_| "checkout_link"),
                    state.map(|_| "order_state"),
                    error.map(|_| "error"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(StorefrontError::UnexpectedResponse(format!(
                    "checkout response carries several outcomes: {}",
                    fields.join(", ")
                )))
            }
        }
    }
}

/// What the checkout modal shows after a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutView {
    /// The buyer already has an order in this state
    ExistingOrder {
        method: PaymentMethod,
        state: OrderState,
        message: String,
    },
    /// Business error from the backend
    Rejected { message: String },
    /// Transport or decoding failure
    OrderError { message: String },
}

/// Next move after a submission settles
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutStep {
    /// Full-page navigation; nothing else changes locally
    Navigate(String),
    Show(CheckoutView),
}

impl CheckoutStep {
    pub fn from_result(method: PaymentMethod, result: Result<CheckoutOutcome>) -> Self {
        match result {
            Ok(CheckoutOutcome::Redirect { checkout_link }) => Self::Navigate(checkout_link),
            Ok(CheckoutOutcome::StateUpdate(state)) => Self::Show(CheckoutView::ExistingOrder {
                method,
                message: existing_order_message(&state),
                state,
            }),
            Ok(CheckoutOutcome::Failure(failure)) => Self::Show(CheckoutView::Rejected {
                message: failure.message(),
            }),
            Err(e) => {
                tracing::error!(method = %method, error = %e, "Checkout failed");
                Self::Show(CheckoutView::OrderError {
                    message: e.user_message(),
                })
            }
        }
    }
}

fn existing_order_message(state: &OrderState) -> String {
    match state {
        OrderState::Fulfilled => {
            "You've already purchased this guide. Check your inbox for the email containing \
             your link."
                .into()
        }
        OrderState::Settled => {
            "Your payment for this guide has already been confirmed. You will receive an email \
             with a link to the guide shortly."
                .into()
        }
        OrderState::ProcessingPayment => {
            "We're still waiting on confirmation of your earlier payment for this guide.".into()
        }
        OrderState::Error(tag) => deslugify_error(tag),
        other => format!("Your existing order is {}.", other.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_request_omits_address() {
        let request = CheckoutRequest::stripe("me@example.com", "fundamentals");
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "me@example.com", "type": "stripe", "id": "fundamentals"})
        );
    }

    #[test]
    fn test_btc_request_flattens_address() {
        let billing = BillingAddress {
            city: "Denver".into(),
            state: "CO".into(),
            zipcode: "80202".into(),
            country: "US".into(),
        };
        let request = CheckoutRequest::btc("me@example.com", "fundamentals", billing);
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body["type"], "btc");
        assert_eq!(body["city"], "Denver");
        assert_eq!(body["zipcode"], "80202");
    }

    #[test]
    fn test_decode_each_shape() {
        assert_eq!(
            CheckoutOutcome::from_json(r#"{"checkout_link":"https://pay.example/i/1"}"#).unwrap(),
            CheckoutOutcome::Redirect { checkout_link: "https://pay.example/i/1".into() }
        );
        assert_eq!(
            CheckoutOutcome::from_json(r#"{"order_state":"Settled"}"#).unwrap(),
            CheckoutOutcome::StateUpdate(OrderState::Settled)
        );
        assert_eq!(
            CheckoutOutcome::from_json(r#"{"error":"error_invalid_email"}"#).unwrap(),
            CheckoutOutcome::Failure(CheckoutFailure::new("error_invalid_email"))
        );
    }

    #[test]
    fn test_decode_rejects_ambiguous_and_empty() {
        let err = CheckoutOutcome::from_json(r#"{"checkout_link":"x","error":"error_y"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("checkout_link, error"));

        assert!(matches!(
            CheckoutOutcome::from_json(r#"{"status":"ok"}"#),
            Err(StorefrontError::UnexpectedResponse(_))
        ));
        assert!(matches!(
            CheckoutOutcome::from_json("not json"),
            Err(StorefrontError::Decode(_))
        ));
    }

    #[test]
    fn test_error_message_deslugified() {
        assert_eq!(deslugify_error("error_invalid_email"), "invalid email");
        assert_eq!(
            deslugify_error("error_checkout_rate_limit_exceeded"),
            "checkout rate limit exceeded"
        );
        assert_eq!(deslugify_error("error_invoice_db_btc: timeout"), "invoice db btc: timeout");
        assert_eq!(deslugify_error("errors_happen"), "errors happen");
    }

    #[test]
    fn test_redirect_only_navigates() {
        let step = CheckoutStep::from_result(
            PaymentMethod::Stripe,
            Ok(CheckoutOutcome::Redirect {
                checkout_link: "https://checkout.stripe.com/c/1".into(),
            }),
        );
        assert_eq!(step, CheckoutStep::Navigate("https://checkout.stripe.com/c/1".into()));
    }

    #[test]
    fn test_failure_and_transport_error_views() {
        let step = CheckoutStep::from_result(
            PaymentMethod::Btc,
            Ok(CheckoutOutcome::Failure(CheckoutFailure::new("error_invalid_location"))),
        );
        assert_eq!(
            step,
            CheckoutStep::Show(CheckoutView::Rejected {
                message: "invalid location".into()
            })
        );

        let step = CheckoutStep::from_result(
            PaymentMethod::Btc,
            Err(StorefrontError::Http("refused".into())),
        );
        assert!(matches!(step, CheckoutStep::Show(CheckoutView::OrderError { .. })));
    }
}

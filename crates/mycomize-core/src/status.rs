//! Order Status Presentation
//!
//! Pure mapping from (query, state) to the blurb the status page renders.
//! Views carry text only; markup lives in the web crate.

use crate::checkout::deslugify_error;
use crate::order::{OrderState, OrderStatusQuery, PaymentMethod};

/// Where buyers are sent when something looks wrong
pub const SUPPORT_EMAIL: &str = "connor@mycomize.com";
pub const SUPPORT_X_URL: &str = "https://x.com/cjamsonx";
pub const SENDER_DOMAIN: &str = "mycomize.com";

/// `Order Status: <label> <icon>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusHeader {
    pub label: String,
    pub icon: &'static str,
}

impl StatusHeader {
    fn new(label: impl Into<String>, icon: &'static str) -> Self {
        Self {
            label: label.into(),
            icon,
        }
    }

    /// Header for a state, `None` when there is nothing to say yet
    pub fn for_state(state: &OrderState) -> Option<Self> {
        match state {
            OrderState::Fulfilled => Some(Self::new("Fulfilled", "\u{2705}")),
            OrderState::Settled => Some(Self::new("Settled", "\u{1f4b0}")),
            OrderState::ProcessingPayment => Some(Self::new("Processing Payment", "\u{231b}")),
            OrderState::Expired => Some(Self::new("Invoice Expired", "\u{23f0}")),
            OrderState::Canceled => Some(Self::new("Canceled", "\u{1f6ab}")),
            OrderState::Failed => Some(Self::new("Failed", "\u{274c}")),
            OrderState::Error(tag) => Some(Self::new(
                format!("Error: {}", deslugify_error(tag)),
                "\u{26a0}\u{fe0f}",
            )),
            OrderState::Pending | OrderState::Unknown(_) => None,
        }
    }
}

/// What the order-status page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusView {
    /// Required identifiers absent
    NotFound,
    ThankYou {
        method: PaymentMethod,
        order_id: String,
        header: Option<StatusHeader>,
        paragraphs: Vec<String>,
        bullets: Vec<String>,
        /// Show the "check your spam folder / contact me" line
        support: bool,
    },
    Expired {
        method: PaymentMethod,
        paragraphs: Vec<String>,
        /// BTC buyers also get the nostr contact code
        show_nostr: bool,
    },
}

impl StatusView {
    pub fn resolve(query: &OrderStatusQuery, state: &OrderState) -> Self {
        let order = match query.resolve() {
            Ok(order) => order,
            Err(e) => {
                tracing::debug!(error = %e, "Order status query incomplete");
                return Self::NotFound;
            }
        };

        if *state == OrderState::Expired {
            return expired(order.method);
        }

        let (paragraphs, bullets) = blurb(order.method, state);
        Self::ThankYou {
            method: order.method,
            order_id: order.order_id,
            header: StatusHeader::for_state(state),
            paragraphs,
            bullets,
            support: true,
        }
    }

    /// Page heading
    pub const fn title(&self) -> &'static str {
        match self {
            Self::NotFound => "Page not found",
            Self::ThankYou { .. } => "Thank You",
            Self::Expired { .. } => "Invoice Expired \u{23f0}",
        }
    }
}

fn expired(method: PaymentMethod) -> StatusView {
    let paragraphs = match method {
        PaymentMethod::Btc => vec![
            "Your BTC invoice has expired. Please try again.".to_string(),
            format!(
                "If the issue persists, please reach out on X ({SUPPORT_X_URL}) or email me at {SUPPORT_EMAIL}. You can also reach me on nostr:"
            ),
        ],
        PaymentMethod::Stripe => {
            vec!["Your checkout session has expired. Please try again.".to_string()]
        }
    };
    StatusView::Expired {
        method,
        paragraphs,
        show_nostr: method == PaymentMethod::Btc,
    }
}

fn blurb(method: PaymentMethod, state: &OrderState) -> (Vec<String>, Vec<String>) {
    let paragraph =
        |text: &str| -> (Vec<String>, Vec<String>) { (vec![text.to_string()], Vec::new()) };

    match (method, state) {
        (PaymentMethod::Btc, OrderState::Fulfilled) => paragraph(
            "Your BTC payment has been confirmed! We sent an email containing your link to the guide.",
        ),
        (PaymentMethod::Btc, OrderState::Settled) => paragraph(
            "Your BTC payment has been confirmed! You will receive an email with a link to the guide in the next few minutes.",
        ),
        (PaymentMethod::Btc, OrderState::ProcessingPayment) => (
            vec![
                "Once your BTC payment is confirmed, we will send the guide to the email you \
                 provided:"
                    .to_string(),
            ],
            vec![
                "\u{26a1} If you used lightning, you should see the guide within a few seconds.".to_string(),
                "\u{1f517} If you paid on-chain, we will send the guide once the transaction has 1 confirmation on the blockchain.".to_string(),
            ],
        ),
        (PaymentMethod::Stripe, OrderState::Fulfilled) => paragraph(
            "We've received your Stripe payment and sent an email containing your link to the guide.",
        ),
        (PaymentMethod::Stripe, OrderState::Settled) => paragraph(
            "We've received your Stripe payment. You will receive an email with a link to the guide in the next few minutes.",
        ),
        (PaymentMethod::Stripe, OrderState::ProcessingPayment) => paragraph(
            "We've received your Stripe payment and are currently waiting for payment confirmation. You will receive an email with a link to the guide once payment is confirmed.",
        ),
        (_, OrderState::Canceled) => {
            paragraph("Your order was canceled. If you were charged, you will be refunded.")
        }
        (_, OrderState::Failed) => paragraph(
            "We couldn't confirm your payment. Please try again or reach out if you believe this is a mistake.",
        ),
        (_, OrderState::Error(tag)) => (
            vec![format!("There was an error processing your order: {}.", deslugify_error(tag))],
            Vec::new(),
        ),
        _ => (Vec::new(), Vec::new()),
    }
}

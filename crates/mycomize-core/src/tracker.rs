//! Order Event Reduction
//!
//! Folds pushed `{order_state}` messages into the single state the status
//! page displays. Transport lives elsewhere (browser `EventSource`, native
//! SSE client); both drive the same tracker.

use serde::Deserialize;

use crate::error::{Result, StorefrontError};
use crate::order::{OrderState, OrderSubscription};

/// One message on an order event stream
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OrderEvent {
    pub order_state: OrderState,
}

impl OrderEvent {
    pub fn parse(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| StorefrontError::Decode(e.to_string()))
    }
}

/// What the transport should do after a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelControl {
    KeepOpen,
    Close,
}

/// Last-write-wins view of one order's state
#[derive(Clone, Debug)]
pub struct OrderTracker {
    subscription: OrderSubscription,
    state: OrderState,
    received: usize,
    closed: bool,
}

impl OrderTracker {
    pub fn new(subscription: OrderSubscription) -> Self {
        Self {
            subscription,
            state: OrderState::Pending,
            received: 0,
            closed: false,
        }
    }

    pub const fn subscription(&self) -> &OrderSubscription {
        &self.subscription
    }

    pub const fn state(&self) -> &OrderState {
        &self.state
    }

    /// Messages applied so far
    pub const fn received(&self) -> usize {
        self.received
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply one raw message.
    ///
    /// Returns the new state when it was applied. Undecodable messages are
    /// logged and leave the state untouched. Nothing applies after close.
    pub fn apply(&mut self, data: &str) -> Option<&OrderState> {
        if self.closed {
            tracing::debug!(key = %self.subscription.key, "Dropping message on closed channel");
            return None;
        }

        let event = match OrderEvent::parse(data) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    method = %self.subscription.method,
                    key = %self.subscription.key,
                    error = %e,
                    "Ignoring malformed order event"
                );
                return None;
            }
        };

        if self.state.is_regression_to(&event.order_state) {
            tracing::warn!(
                key = %self.subscription.key,
                from = %self.state,
                to = %event.order_state,
                "Order state moved backwards"
            );
        }

        tracing::info!(
            method = %self.subscription.method,
            key = %self.subscription.key,
            state = %event.order_state,
            "Received order event"
        );

        self.state = event.order_state;
        self.received += 1;
        Some(&self.state)
    }

    /// Whether the channel is still worth keeping open
    pub const fn control(&self) -> ChannelControl {
        if self.closed || self.state.is_terminal() {
            ChannelControl::Close
        } else {
            ChannelControl::KeepOpen
        }
    }

    /// Channel-level failure: log and close
    pub fn fail(&mut self, reason: &str) {
        tracing::error!(
            method = %self.subscription.method,
            key = %self.subscription.key,
            reason,
            "Order event channel failed"
        );
        self.close();
    }

    pub fn close(&mut self) {
        if !self.closed {
            tracing::debug!(key = %self.subscription.key, "Closing order event channel");
            self.closed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::PaymentMethod;

    fn tracker() -> OrderTracker {
        OrderTracker::new(OrderSubscription::new(PaymentMethod::Btc, "xyz"))
    }

    #[test]
    fn test_starts_pending() {
        let tracker = tracker();
        assert_eq!(*tracker.state(), OrderState::Pending);
        assert_eq!(tracker.control(), ChannelControl::KeepOpen);
    }

    #[test]
    fn test_last_write_wins() {
        let mut tracker = tracker();
        tracker.apply(r#"{"order_state":"Processing Payment"}"#);
        tracker.apply(r#"{"order_state":"Settled"}"#);
        tracker.apply(r#"{"order_state":"Processing Payment"}"#);
        assert_eq!(*tracker.state(), OrderState::ProcessingPayment);
        assert_eq!(tracker.received(), 3);
    }

    #[test]
    fn test_malformed_message_keeps_state() {
        let mut tracker = tracker();
        tracker.apply(r#"{"order_state":"Settled"}"#);
        assert!(tracker.apply("queue timeout").is_none());
        assert!(tracker.apply(r#"{"status":"ok"}"#).is_none());
        assert_eq!(*tracker.state(), OrderState::Settled);
        assert_eq!(tracker.received(), 1);
    }

    #[test]
    fn test_terminal_state_requests_close() {
        let mut tracker = tracker();
        tracker.apply(r#"{"order_state":"Settled"}"#);
        assert_eq!(tracker.control(), ChannelControl::KeepOpen);
        tracker.apply(r#"{"order_state":"Fulfilled"}"#);
        assert_eq!(tracker.control(), ChannelControl::Close);
    }

    #[test]
    fn test_nothing_applies_after_close() {
        let mut tracker = tracker();
        tracker.apply(r#"{"order_state":"Processing Payment"}"#);
        tracker.fail("connection reset");
        assert!(tracker.is_closed());
        assert!(tracker.apply(r#"{"order_state":"Settled"}"#).is_none());
        assert_eq!(*tracker.state(), OrderState::ProcessingPayment);
    }
}

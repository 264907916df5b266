//! Order Event Stream (native)
//!
//! Server-sent events subscriber for `/{btcpay,stripe}-webhook-events`.
//! Framing is handled by `eventsource-stream`; [`OrderWatch`] owns the
//! decoded stream, so dropping or closing it tears the connection down and
//! no state change can land afterwards.

use eventsource_stream::{Event, EventStreamError, Eventsource};
use futures::stream::{BoxStream, Stream, StreamExt};
use reqwest::header::{ACCEPT, CACHE_CONTROL};

use mycomize_core::{
    ChannelControl, OrderState, OrderSubscription, OrderTracker, Result, StorefrontError,
};

use crate::client::{BackendClient, http_error};

/// Longest line accepted before the channel is failed
pub const MAX_LINE_BYTES: usize = 64 * 1024;

type EventResult = std::result::Result<Event, EventStreamError<StorefrontError>>;

/// Fail the byte stream once a single line outgrows [`MAX_LINE_BYTES`].
///
/// Any of `\r`, `\n` ends a line, so `\r\n` is covered too.
fn cap_line_length<S, B>(bytes: S) -> impl Stream<Item = Result<B>> + Send
where
    S: Stream<Item = reqwest::Result<B>> + Send,
    B: AsRef<[u8]> + Send,
{
    let mut line_len = 0usize;
    bytes.map(move |chunk| {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => return Err(http_error(e)),
        };
        let bytes = chunk.as_ref();
        line_len = match bytes.iter().rposition(|&b| b == b'\n' || b == b'\r') {
            Some(end) => bytes.len() - end - 1,
            None => line_len + bytes.len(),
        };
        if line_len > MAX_LINE_BYTES {
            return Err(StorefrontError::Channel(format!(
                "event stream line exceeds {MAX_LINE_BYTES} bytes"
            )));
        }
        Ok(chunk)
    })
}

/// Live subscription to one order's state
pub struct OrderWatch {
    tracker: OrderTracker,
    stream: Option<BoxStream<'static, EventResult>>,
}

impl OrderWatch {
    /// Open the event stream for `subscription`
    pub async fn open(client: &BackendClient, subscription: OrderSubscription) -> Result<Self> {
        let url = client.config().order_events_url(&subscription);
        tracing::info!(
            method = %subscription.method,
            key = %subscription.key,
            "Opening order event stream"
        );

        let response = client
            .http()
            .get(&url)
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::Status {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        let stream = cap_line_length(response.bytes_stream())
            .eventsource()
            .boxed();

        Ok(Self {
            tracker: OrderTracker::new(subscription),
            stream: Some(stream),
        })
    }

    pub const fn state(&self) -> &OrderState {
        self.tracker.state()
    }

    pub const fn subscription(&self) -> &OrderSubscription {
        self.tracker.subscription()
    }

    pub const fn is_closed(&self) -> bool {
        self.tracker.is_closed()
    }

    /// Wait for the next applied state.
    ///
    /// Returns `None` once the channel is closed: after an `error` event, a
    /// transport failure, the server ending the stream, a terminal state, or
    /// an explicit [`close`](Self::close).
    pub async fn next_state(&mut self) -> Option<OrderState> {
        loop {
            if self.tracker.is_closed() {
                self.release();
                return None;
            }

            let stream = self.stream.as_mut()?;
            match stream.next().await {
                // The backend names failures `event: error`
                Some(Ok(event)) if event.event == "error" => self.tracker.fail(&event.data),
                Some(Ok(event)) => {
                    let Some(state) = self.tracker.apply(&event.data).cloned() else {
                        continue;
                    };
                    if self.tracker.control() == ChannelControl::Close {
                        self.close();
                    }
                    return Some(state);
                }
                Some(Err(e)) => self.tracker.fail(&e.to_string()),
                None => {
                    tracing::warn!(
                        key = %self.tracker.subscription().key,
                        "Order event stream ended by server"
                    );
                    self.tracker.close();
                }
            }
        }
    }

    /// Drop the connection; no further states will be reported
    pub fn close(&mut self) {
        self.tracker.close();
        self.release();
    }

    fn release(&mut self) {
        self.stream = None;
    }
}

impl Drop for OrderWatch {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for OrderWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderWatch")
            .field("tracker", &self.tracker)
            .field("open", &self.stream.is_some())
            .finish()
    }
}

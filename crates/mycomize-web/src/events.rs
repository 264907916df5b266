//! Browser Order Event Channel
//!
//! Wraps `web_sys::EventSource`. The channel is closed when the value is
//! dropped, when the server reports an error, or once a terminal state
//! arrives; callbacks are detached before the source is released.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Event, EventSource, MessageEvent};

use mycomize_core::{
    BackendConfig, ChannelControl, OrderState, OrderSubscription, OrderTracker, Result,
    StorefrontError,
};

/// Live `EventSource` for one order
pub struct OrderEventSource {
    source: EventSource,
    tracker: Rc<RefCell<OrderTracker>>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
}

impl OrderEventSource {
    /// Open the stream and report every applied state to `on_state`
    pub fn open(
        config: &BackendConfig,
        subscription: OrderSubscription,
        on_state: impl Fn(OrderState) + 'static,
    ) -> Result<Self> {
        let url = config.order_events_url(&subscription);
        tracing::info!(
            method = %subscription.method,
            key = %subscription.key,
            "Opening order event stream"
        );

        let source = EventSource::new(&url)
            .map_err(|e| StorefrontError::Channel(format!("{e:?}")))?;
        let tracker = Rc::new(RefCell::new(OrderTracker::new(subscription)));

        let on_message = {
            let tracker = Rc::clone(&tracker);
            let source = source.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
                let Some(data) = event.data().as_string() else {
                    tracing::warn!("Order event without text payload");
                    return;
                };

                let (applied, control) = {
                    let mut tracker = tracker.borrow_mut();
                    let applied = tracker.apply(&data).cloned();
                    (applied, tracker.control())
                };

                if let Some(state) = applied {
                    on_state(state);
                }
                if control == ChannelControl::Close {
                    tracker.borrow_mut().close();
                    source.close();
                }
            })
        };
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // Fires for transport failures and for server frames named `error`
        let on_error = {
            let tracker = Rc::clone(&tracker);
            let source = source.clone();
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let reason = event
                    .dyn_ref::<MessageEvent>()
                    .and_then(|message| message.data().as_string())
                    .unwrap_or_else(|| "EventSource error".to_string());
                tracker.borrow_mut().fail(&reason);
                source.close();
            })
        };
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Ok(Self {
            source,
            tracker,
            _on_message: on_message,
            _on_error: on_error,
        })
    }

    pub fn close(&self) {
        self.tracker.borrow_mut().close();
        self.source.close();
    }
}

impl Drop for OrderEventSource {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.close();
    }
}

//! Order Status Page
//!
//! Reads `type`, `order_id` and `invoice_id`/`session_id` from the query
//! string, subscribes to the order's event stream and renders the blurb for
//! the latest state. At most one stream is open per mounted page; it is
//! replaced when the query changes and dropped on unmount.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use mycomize_core::{BackendConfig, OrderState, OrderStatusQuery, StatusView};

use crate::components::StatusPanel;
use crate::events::OrderEventSource;

const QUERY_KEYS: [&str; 4] = ["type", "order_id", "invoice_id", "session_id"];

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    let config = expect_context::<BackendConfig>();
    let params = use_query_map();

    let query = Memo::new(move |_| {
        params.with(|map| {
            OrderStatusQuery::from_pairs(
                QUERY_KEYS
                    .into_iter()
                    .filter_map(|key| map.get(key).map(|value| (key, value))),
            )
        })
    });

    let (order_state, set_order_state) = signal(OrderState::Pending);
    let channel = StoredValue::new_local(None::<OrderEventSource>);

    Effect::new(move |_| {
        let query = query.get();

        // Replacing the slot drops (and closes) the previous stream
        channel.set_value(None);
        set_order_state.set(OrderState::Pending);

        let order = match query.resolve() {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(error = %e, "Order status query incomplete");
                return;
            }
        };

        let order_id = order.order_id;
        match OrderEventSource::open(&config, order.subscription, move |state| {
            set_order_state.try_set(state);
        }) {
            Ok(source) => channel.set_value(Some(source)),
            Err(e) => tracing::error!(
                order_id = %order_id,
                error = %e,
                "Could not open order event stream"
            ),
        }
    });

    on_cleanup(move || {
        channel.try_update_value(|slot| *slot = None);
    });

    view! {
        {move || view! {
            <StatusPanel status=StatusView::resolve(&query.get(), &order_state.get()) />
        }}
    }
}

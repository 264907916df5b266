//! Order status blurbs

use leptos::prelude::*;
use mycomize_core::StatusView;

use crate::components::{Divider, SupportLine};
use crate::pages::NotFoundPage;

/// Renders whatever [`StatusView`] the current order state maps to
#[component]
pub fn StatusPanel(status: StatusView) -> impl IntoView {
    let title = status.title();

    match status {
        StatusView::NotFound => view! { <NotFoundPage /> }.into_any(),

        StatusView::ThankYou { method, order_id, header, paragraphs, bullets, support } => {
            let class = format!("order-status order-{}", method.as_str());
            view! {
                <section class=class>
                    <Divider />
                    <h1>{title}</h1>
                    <div class="order">
                        {header.map(|h| view! {
                            <h3>"Order Status: " <strong>{h.label} " " {h.icon}</strong></h3>
                        })}
                        <h3>"Order ID: " <strong>{order_id}</strong></h3>
                        <p class="note">"Please keep this ID for your records."</p>
                    </div>
                    <div class="info">
                        {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                        <ul>
                            {bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
                        </ul>
                        {support.then(|| view! { <SupportLine /> })}
                    </div>
                </section>
            }
            .into_any()
        }

        StatusView::Expired { method, paragraphs, show_nostr } => {
            let class = format!("order-status expired order-{}", method.as_str());
            view! {
                <section class=class>
                    <Divider />
                    <h1>{title}</h1>
                    <div class="info">
                        {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                        {show_nostr.then(|| view! {
                            <img src="/nostr-qrcode.png" alt="nostr qrcode" class="qrcode" />
                        })}
                    </div>
                    <a href="/" class="btn btn-primary">"Try Again"</a>
                </section>
            }
            .into_any()
        }
    }
}

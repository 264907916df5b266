//! Guide Listing
//!
//! Loads the catalog once on mount. Picking a guide opens the checkout
//! modal; closing the modal clears the selection.

use leptos::prelude::*;
use mycomize_core::{Guide, catalog::format_usd};

use crate::api::use_backend;
use crate::components::CheckoutModal;

#[component]
pub fn GuidesPage() -> impl IntoView {
    let client = use_backend();
    let (guides, set_guides) = signal(Vec::<Guide>::new());
    let (loaded, set_loaded) = signal(false);
    let (selected, set_selected) = signal(None::<Guide>);

    leptos::task::spawn_local(async move {
        match client.list_guides().await {
            Ok(list) => set_guides.set(list),
            Err(e) => tracing::error!(error = %e, "Failed to load guides"),
        }
        set_loaded.set(true);
    });

    let close = Callback::new(move |()| set_selected.set(None));

    view! {
        <div class="guides">
            <h1>"Guides"</h1>
            {move || {
                let list = guides.get();
                if !loaded.get() {
                    view! { <p class="loading">"Loading guides..."</p> }.into_any()
                } else if list.is_empty() {
                    view! { <p class="empty">"No guides available at the moment."</p> }.into_any()
                } else {
                    list.into_iter()
                        .map(|guide| view! { <GuideCard guide=guide on_select=set_selected /> })
                        .collect_view()
                        .into_any()
                }
            }}
            {move || {
                selected
                    .get()
                    .map(|guide| view! { <CheckoutModal guide=guide on_close=close /> })
            }}
        </div>
    }
}

#[component]
fn GuideCard(guide: Guide, on_select: WriteSignal<Option<Guide>>) -> impl IntoView {
    let price = format_usd(guide.price);
    let title = guide.title.clone();
    let description = guide.description.clone();
    let image = guide.image.clone();

    view! {
        <article class="guide-card">
            <img src=image alt=title.clone() />
            <h2>{title}</h2>
            <p>{description}</p>
            <p class="price">{price}</p>
            <button class="btn btn-primary" on:click=move |_| on_select.set(Some(guide.clone()))>
                "Buy Now"
            </button>
        </article>
    }
}

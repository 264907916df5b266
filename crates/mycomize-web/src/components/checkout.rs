//! Checkout Modal
//!
//! Collects the buyer's email (plus a billing address for BTC, used for
//! sales tax) and posts it to `/checkout`. A `checkout_link` answer leaves
//! the site; anything else is shown in place.

use leptos::prelude::*;
use mycomize_core::{
    BillingAddress, CheckoutRequest, CheckoutStep, CheckoutView, Guide, OrderSummary,
    PaymentMethod, StatusHeader,
};

use crate::api::{navigate_external, use_backend};
use crate::components::{Divider, SupportLine};

#[component]
pub fn CheckoutModal(guide: Guide, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let client = use_backend();
    let summary = OrderSummary::from(&guide);
    let guide_id = guide.id.clone();

    let (email, set_email) = signal(String::new());
    let (method, set_method) = signal(PaymentMethod::Stripe);
    let (city, set_city) = signal(String::new());
    let (region, set_region) = signal(String::new());
    let (zipcode, set_zipcode) = signal(String::new());
    let (country, set_country) = signal("US".to_string());
    let (submitting, set_submitting) = signal(false);
    let (outcome, set_outcome) = signal(None::<CheckoutView>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let method = method.get_untracked();
        let request = match method {
            PaymentMethod::Stripe => {
                CheckoutRequest::stripe(email.get_untracked(), guide_id.clone())
            }
            PaymentMethod::Btc => CheckoutRequest::btc(
                email.get_untracked(),
                guide_id.clone(),
                BillingAddress {
                    city: city.get_untracked(),
                    state: region.get_untracked(),
                    zipcode: zipcode.get_untracked(),
                    country: country.get_untracked(),
                },
            ),
        };

        set_submitting.set(true);
        set_outcome.set(None);

        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = client.checkout(&request).await;
            match CheckoutStep::from_result(method, result) {
                CheckoutStep::Navigate(link) => navigate_external(&link),
                CheckoutStep::Show(view) => {
                    set_outcome.set(Some(view));
                    set_submitting.set(false);
                }
            }
        });
    };

    let pay_class = move |option: PaymentMethod| {
        if method.get() == option {
            format!("btn pay pay-{} selected", option.as_str())
        } else {
            format!("btn pay pay-{}", option.as_str())
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button type="button" class="close" on:click=move |_| on_close.run(())>
                    "\u{2715}"
                </button>
                <h2>{guide.title.clone()}</h2>
                <img class="guide-thumb" src=guide.image.clone() alt=guide.title.clone() />
                <Divider />

                {move || outcome.get().map(|view| view! { <CheckoutNotice outcome=view /> })}

                <form on:submit=submit>
                    <p class="hint">
                        "Provide your email to receive instant access on Web, ePub, and Kindle formats."
                    </p>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required=true
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <div class="pay-options">
                        <button
                            type="button"
                            class=move || pay_class(PaymentMethod::Stripe)
                            on:click=move |_| set_method.set(PaymentMethod::Stripe)
                        >
                            "Pay with card"
                        </button>
                        <button
                            type="button"
                            class=move || pay_class(PaymentMethod::Btc)
                            on:click=move |_| set_method.set(PaymentMethod::Btc)
                        >
                            "Pay with bitcoin"
                        </button>
                    </div>

                    <Show when=move || method.get() == PaymentMethod::Btc>
                        <fieldset class="billing">
                            <legend>"Billing address (for sales tax)"</legend>
                            <input
                                placeholder="City"
                                required=true
                                prop:value=move || city.get()
                                on:input=move |ev| set_city.set(event_target_value(&ev))
                            />
                            <input
                                placeholder="State"
                                required=true
                                prop:value=move || region.get()
                                on:input=move |ev| set_region.set(event_target_value(&ev))
                            />
                            <input
                                placeholder="Zip code"
                                required=true
                                prop:value=move || zipcode.get()
                                on:input=move |ev| set_zipcode.set(event_target_value(&ev))
                            />
                            <input
                                placeholder="Country"
                                required=true
                                prop:value=move || country.get()
                                on:input=move |ev| set_country.set(event_target_value(&ev))
                            />
                        </fieldset>
                    </Show>

                    <div class="summary">
                        <h3>"Order Summary"</h3>
                        <p>"Subtotal" <span>{summary.subtotal.clone()}</span></p>
                        <Divider dark=true />
                        <p>"Tax" <span>{summary.tax.clone()}</span></p>
                        <Divider dark=true />
                        <p class="total">"Order Total" <span>{summary.total.clone()}</span></p>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "..." } else { "Continue to payment" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Result of a submission that did not leave the site
#[component]
fn CheckoutNotice(outcome: CheckoutView) -> impl IntoView {
    match outcome {
        CheckoutView::ExistingOrder { method, state, message } => {
            let header = StatusHeader::for_state(&state);
            view! {
                <div class="notice">
                    <h3>"Existing " {method.label()} " order"</h3>
                    {header.map(|h| view! {
                        <p>"Order Status: " <strong>{h.label} " " {h.icon}</strong></p>
                    })}
                    <p>{message}</p>
                    <SupportLine />
                </div>
            }
            .into_any()
        }
        CheckoutView::Rejected { message } => view! {
            <div class="notice notice-error">
                <h3>"We couldn't start your order"</h3>
                <p class="capitalize">{message}</p>
            </div>
        }
        .into_any(),
        CheckoutView::OrderError { message } => view! {
            <div class="notice notice-error">
                <h3>"Order error"</h3>
                <p>{message}</p>
                <SupportLine />
            </div>
        }
        .into_any(),
    }
}

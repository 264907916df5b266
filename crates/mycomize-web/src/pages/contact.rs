//! Contact Page

use leptos::prelude::*;
use mycomize_core::status::{SUPPORT_EMAIL, SUPPORT_X_URL};

#[component]
pub fn ContactPage() -> impl IntoView {
    let mailto = format!("mailto:{SUPPORT_EMAIL}");

    view! {
        <div class="contact">
            <h1>"Get in touch"</h1>
            <p>"Questions about a guide or an order? Reach out any time."</p>
            <dl>
                <dt>"Email"</dt>
                <dd><a href=mailto class="accent">{SUPPORT_EMAIL}</a></dd>
                <dt>"X"</dt>
                <dd><a href=SUPPORT_X_URL class="accent">"@cjamsonx"</a></dd>
            </dl>
        </div>
    }
}

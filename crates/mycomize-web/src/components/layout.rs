//! Shared page chrome

use leptos::prelude::*;
use mycomize_core::status::{SENDER_DOMAIN, SUPPORT_EMAIL, SUPPORT_X_URL};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <a href="/" class="brand">"mycomize"</a>
            <nav>
                <a href="/guides">"Guides"</a>
                <a href="/blog">"Blog"</a>
                <a href="/contact">"Contact"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <Divider />
            <p>"made with \u{1F344} by Connor Davis"</p>
            <div class="social">
                <a href="https://github.com/cjams/shroomsathome">"GitHub"</a>
                <a href=SUPPORT_X_URL>"X"</a>
            </div>
        </footer>
    }
}

#[component]
pub fn Divider(#[prop(optional)] dark: bool) -> impl IntoView {
    let class = if dark { "divider divider-dark" } else { "divider" };
    view! { <div class=class></div> }
}

/// "Didn't get the email?" line shown under order blurbs
#[component]
pub fn SupportLine() -> impl IntoView {
    let mailto = format!("mailto:{SUPPORT_EMAIL}");
    view! {
        <p class="support">
            "If you don't see an email from " <strong>{SENDER_DOMAIN}</strong>
            ", please check your spam folder. If you still don't see one, please reach out to me on "
            <a href=SUPPORT_X_URL class="accent">"X"</a>
            " or email me at "
            <a href=mailto class="accent">{SUPPORT_EMAIL}</a>
            "."
        </p>
    }
}

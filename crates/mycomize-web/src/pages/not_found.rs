use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p class="code">"404"</p>
            <h1>"Page not found"</h1>
            <p>"Sorry, we couldn't find the page you're looking for."</p>
            <div class="actions">
                <a href="/" class="btn btn-primary">"Go back home"</a>
                <a href="/contact">"Contact support \u{2192}"</a>
            </div>
        </div>
    }
}

//! Landing Page

use leptos::prelude::*;

use crate::components::Divider;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Divider />
            <ul class="questions">
                <li>"Do you want to grow your own mushrooms but are unsure where to start?"</li>
                <li>"Do you feel overwhelmed by the vast sea of cultivation information found online?"</li>
                <li>"Do you want to avoid wasting time and money on methods that may not work or yield much?"</li>
            </ul>
            <p>
                <strong>"Mushroom lovers"</strong>
                ": do any of these questions resonate with you? If so, then you've come to the right place."
            </p>
            <p>
                <em class="accent">"Shrooms At Home"</em>
                " is a concise yet complete guide for getting started growing mushrooms. It distills \
                 the essentials of a successful grow, from the methods to follow to the materials to purchase."
            </p>
            <p>
                "When you buy a guide you get the methods I use today and every improvement I make to them later."
            </p>
            <a href="/guides" class="btn btn-primary">"Browse Guides"</a>
        </div>
    }
}

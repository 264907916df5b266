//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::api;
use crate::components::{Footer, Header};
use crate::pages::{
    BlogPage, ContactPage, GuidesPage, LandingPage, NotFoundPage, OrderStatusPage,
};

/// Paths with a page of their own; anything else renders the 404 page
pub const ROUTED_PATHS: &[&str] = &["/", "/guides", "/blog", "/contact", "/order-status"];

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = api::backend_config();
    tracing::info!(
        backend = config.base_url(),
        routes = ?ROUTED_PATHS,
        "Starting storefront"
    );
    provide_context(config);

    view! {
        <Router>
            <Header />
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/guides") view=GuidesPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/order-status") view=OrderStatusPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

//! Blog Index

use leptos::prelude::*;

struct Post {
    title: &'static str,
    /// Full article, once it is published on the site
    href: Option<&'static str>,
    description: &'static str,
    date: &'static str,
    datetime: &'static str,
    category: &'static str,
}

const POSTS: &[Post] = &[Post {
    title: "Microdosing Psilocybin Mushrooms",
    href: None,
    description: "Curious about microdosing? This post walks you through the basics of \
                  microdosing for health and wellness.",
    date: "April 1, 2025",
    datetime: "2025-04-01",
    category: "Psychedelics",
}];

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="blog">
            <p class="eyebrow">"Learn"</p>
            <h1>"Blog"</h1>
            <p class="subtitle">
                "Learn about the latest in mushroom cultivation and psychedelic science"
            </p>
            <div class="posts">
                {POSTS
                    .iter()
                    .map(|post| view! {
                        <article class="post">
                            <div class="meta">
                                <time datetime=post.datetime>{post.date}</time>
                                <span class="category">{post.category}</span>
                            </div>
                            <h3>
                                {match post.href {
                                    Some(href) => {
                                        view! { <a href=href>{post.title}</a> }.into_any()
                                    }
                                    None => view! { {post.title} }.into_any(),
                                }}
                            </h3>
                            <p>{post.description}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

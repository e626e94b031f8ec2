//! Rendered Markdown body for posts and messages.

use leptos::prelude::*;

use crate::util::format::render_post;

/// Markdown `source` rendered to HTML with `@mention` links. `render_post`
/// escapes raw HTML and rewrites link and image URLs to `#` unless they are
/// relative or use `http`, `https` or `mailto`, so the result is safe for
/// `inner_html`.
#[component]
pub fn PostBody(#[prop(into)] source: Signal<String>) -> impl IntoView {
    let rendered = move || render_post(&source.get());
    view! { <div class="post-body" inner_html=rendered></div> }
}

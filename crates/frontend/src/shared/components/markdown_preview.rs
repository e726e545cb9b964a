use leptos::prelude::*;

use crate::shared::markdown::markdown_to_html;

/// Renders a markdown string as read-only formatted content.
///
/// The renderer escapes the source before building markup, so injecting the
/// result via `inner_html` is safe.
#[component]
pub fn MarkdownPreview(
    /// Markdown source
    source: String,
) -> impl IntoView {
    let html = markdown_to_html(&source);
    view! { <div class="markdown-preview" inner_html=html></div> }
}

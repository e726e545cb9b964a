pub mod global_context;

use global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Metadata Catalog"</span>
            </div>
            <label class="top-header__toggle" title="Allow editing the catalog">
                <input
                    type="checkbox"
                    class="top-header__toggle-input"
                    prop:checked=ctx.can_edit
                    on:change=move |ev| ctx.can_edit.set(event_target_checked(&ev))
                />
                <span>"Editing enabled"</span>
            </label>
        </header>
    }
}

/// Application shell: top header plus the content area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-content">{children()}</main>
        </div>
    }
}

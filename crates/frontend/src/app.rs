use crate::domain::m001_entity_type::ui::details::EntityTypeDetails;
use crate::domain::m001_entity_type::ui::list::EntityTypeList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
enum Screen {
    List,
    Details(String),
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let screen = RwSignal::new(Screen::List);
    let open_details = Callback::new(move |id: String| screen.set(Screen::Details(id)));
    let back_to_list = Callback::new(move |_: ()| screen.set(Screen::List));

    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title("Metadata Catalog");
        }
    });

    view! {
        <Shell>
            {move || match screen.get() {
                Screen::List => view! { <EntityTypeList on_open=open_details /> }.into_any(),
                Screen::Details(id) => {
                    view! { <EntityTypeDetails id=id on_back=back_to_list /> }.into_any()
                }
            }}
        </Shell>
    }
}

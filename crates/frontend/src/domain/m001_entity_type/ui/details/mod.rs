use contracts::domain::m001_entity_type::aggregate::{CustomProperty, EntityType};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::m001_entity_type::api;
use crate::domain::m001_entity_type::ui::add_property::AddPropertyModal;
use crate::domain::m001_entity_type::ui::custom_properties::{
    CustomPropertyTable, UpdateEntityType,
};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::markdown_preview::MarkdownPreview;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Entity-type details screen: header, markdown description and the
/// custom-property table. Owns the persist sink handed to the table.
#[component]
#[allow(non_snake_case)]
pub fn EntityTypeDetails(id: String, on_back: Callback<()>) -> impl IntoView {
    let entity = RwSignal::new(Option::<EntityType>::None);
    let error = RwSignal::new(Option::<String>::None);
    let show_add_modal = RwSignal::new(false);
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    let fetch = {
        let id = id.clone();
        move || {
            let id = id.clone();
            spawn_local(async move {
                match api::get_entity_type(&id).await {
                    Ok(item) => {
                        entity.set(Some(item));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };
    fetch();

    // Persist sink shared by the property table and the add-property flow:
    // PUTs the replacement list and swaps in the aggregate the server
    // returns.
    let update_entity_type: UpdateEntityType = Arc::new({
        let id = id.clone();
        move |properties: Vec<CustomProperty>| -> Pin<Box<dyn Future<Output = Result<(), String>>>> {
            let id = id.clone();
            Box::pin(async move {
                let updated = api::update_custom_properties(&id, properties).await?;
                entity.set(Some(updated));
                Ok(())
            })
        }
    });

    let custom_properties = Signal::derive(move || {
        entity
            .get()
            .map(|e| e.custom_properties)
            .unwrap_or_default()
    });
    let existing_names = Signal::derive(move || {
        custom_properties
            .get()
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<String>>()
    });
    let has_access = Signal::derive(move || ctx.can_edit.get());

    let handle_add = {
        let update_entity_type = update_entity_type.clone();
        Callback::new(move |property: CustomProperty| {
            let mut next = custom_properties.get_untracked();
            next.push(property);
            let save = update_entity_type(next);
            spawn_local(async move {
                match save.await {
                    Ok(()) => show_add_modal.set(false),
                    Err(e) => error.set(Some(e)),
                }
            });
        })
    };

    let table_sink = update_entity_type.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <Button
                        variant="ghost"
                        class="header__back"
                        on_click=Callback::new(move |_| on_back.run(()))
                    >
                        {icon("arrow-left")}
                        "Back"
                    </Button>
                    <h1 class="header__title">
                        {move || {
                            entity
                                .get()
                                .map(|e| e.display_title())
                                .unwrap_or_else(|| "Loading...".to_string())
                        }}
                    </h1>
                </div>
                <div class="header__actions">
                    <Button
                        disabled=Signal::derive(move || !ctx.can_edit.get())
                        title=Signal::derive(move || {
                            if ctx.can_edit.get() {
                                "Add a custom property".to_string()
                            } else {
                                "Editing is disabled".to_string()
                            }
                        })
                        on_click=Callback::new(move |_| show_add_modal.set(true))
                    >
                        {icon("plus")}
                        "Add property"
                    </Button>
                    <Button
                        variant="secondary"
                        on_click=Callback::new({
                            let fetch = fetch.clone();
                            move |_| fetch()
                        })
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || {
                entity
                    .get()
                    .and_then(|e| e.description)
                    .filter(|d| !d.trim().is_empty())
                    .map(|d| view! {
                        <div class="page__description">
                            <MarkdownPreview source=d />
                        </div>
                    })
            }}

            <section class="page__section">
                <h2 class="page__section-title">"Custom properties"</h2>
                <CustomPropertyTable
                    custom_properties=custom_properties
                    has_access=has_access
                    update_entity_type=table_sink
                />
            </section>

            <Show when=move || show_add_modal.get()>
                <AddPropertyModal
                    existing_names=existing_names
                    on_submit=handle_add
                    on_cancel=Callback::new(move |_| show_add_modal.set(false))
                />
            </Show>
        </div>
    }
}

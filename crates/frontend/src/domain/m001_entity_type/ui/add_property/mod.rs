use contracts::domain::m001_entity_type::aggregate::{CustomProperty, EntityType};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::m001_entity_type::api;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::modal_frame::ModalFrame;

/// Modal form for attaching a new custom property to an entity type.
///
/// Property types are the field-category types fetched from the catalog.
/// `on_submit` receives the assembled property; the owner persists it and
/// closes the modal.
#[component]
#[allow(non_snake_case)]
pub fn AddPropertyModal(
    /// Names already taken within the owning list
    #[prop(into)]
    existing_names: Signal<Vec<String>>,
    on_submit: Callback<CustomProperty>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let selected_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let field_types = RwSignal::new(Vec::<EntityType>::new());
    let error = RwSignal::new(Option::<String>::None);

    // Load the available property types once, on mount
    spawn_local(async move {
        match api::list_entity_types(Some("field")).await {
            Ok(types) => {
                if let Some(first) = types.first() {
                    selected_type.set(first.name.clone());
                }
                field_types.set(types);
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let trimmed_name = move || name.get().trim().to_string();
    let is_duplicate = move || existing_names.get().contains(&trimmed_name());
    let can_submit = move || {
        !trimmed_name().is_empty() && !is_duplicate() && !selected_type.get().is_empty()
    };

    let handle_submit = Callback::new(move |_: ()| {
        let Some(field_type) = field_types
            .get_untracked()
            .into_iter()
            .find(|t| t.name == selected_type.get_untracked())
        else {
            return;
        };
        let text = description.get_untracked();
        let property = CustomProperty {
            name: name.get_untracked().trim().to_string(),
            property_type: field_type.as_reference(),
            description: if text.trim().is_empty() { None } else { Some(text) },
        };
        on_submit.run(property);
    });

    let type_options = Signal::derive(move || {
        field_types
            .get()
            .iter()
            .map(|t| (t.name.clone(), t.display_title()))
            .collect::<Vec<(String, String)>>()
    });

    view! {
        <ModalFrame on_close=on_cancel modal_class="add-property-modal">
            <div class="modal__header">
                <h2 class="modal__title">"Add property"</h2>
            </div>
            <div class="modal__body">
                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                <Input
                    label="Name"
                    value=Signal::derive(move || name.get())
                    on_input=Callback::new(move |text| name.set(text))
                    placeholder="e.g. owner"
                />
                {move || {
                    is_duplicate()
                        .then(|| view! {
                            <p class="form__hint form__hint--error">
                                "A property with this name already exists"
                            </p>
                        })
                }}
                <Select
                    label="Type"
                    value=Signal::derive(move || selected_type.get())
                    on_change=Callback::new(move |value| selected_type.set(value))
                    options=type_options
                />
                <Textarea
                    label="Description"
                    value=Signal::derive(move || description.get())
                    on_input=Callback::new(move |text| description.set(text))
                    placeholder="Optional markdown description"
                    rows=5
                />
            </div>
            <div class="modal__footer">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
                <Button
                    disabled=Signal::derive(move || !can_submit())
                    on_click=Callback::new(move |_| handle_submit.run(()))
                >
                    "Add"
                </Button>
            </div>
        </ModalFrame>
    }
}

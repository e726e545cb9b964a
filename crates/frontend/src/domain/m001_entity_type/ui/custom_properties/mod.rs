use contracts::domain::m001_entity_type::aggregate::{
    with_description, without_property, CustomProperty,
};
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::confirmation_modal::ConfirmationModal;
use crate::shared::components::markdown_editor_modal::MarkdownEditorModal;
use crate::shared::components::markdown_preview::MarkdownPreview;
use crate::shared::icons::icon;

/// Tooltip shown on row actions when editing is not permitted
pub const NO_PERMISSION_FOR_ACTION: &str =
    "You do not have permission to perform this action";

/// Async sink that persists a replacement custom-property list.
///
/// Owned by the parent screen; this component never talks to storage
/// itself, it only derives the next list and hands it over.
pub type UpdateEntityType = Arc<
    dyn Fn(Vec<CustomProperty>) -> Pin<Box<dyn Future<Output = Result<(), String>>>>
        + Send
        + Sync,
>;

/// Which mutation is pending, and for which property.
///
/// A single tagged value instead of two independent fields: a selected
/// property cannot exist without an operation, and vice versa.
#[derive(Clone, Debug, PartialEq)]
enum PendingAction {
    Idle,
    Update(CustomProperty),
    Delete(CustomProperty),
}

/// Table of the custom properties attached to an entity type, with inline
/// edit (markdown modal) and delete (confirmation modal) per row.
#[component]
#[allow(non_snake_case)]
pub fn CustomPropertyTable(
    /// Current property list, in display order
    #[prop(into)]
    custom_properties: Signal<Vec<CustomProperty>>,
    /// Whether the viewer may edit or delete properties
    #[prop(into)]
    has_access: Signal<bool>,
    /// Persist sink for the mutated list
    update_entity_type: UpdateEntityType,
) -> impl IntoView {
    let pending = RwSignal::new(PendingAction::Idle);

    let handle_update_save = {
        let update_entity_type = update_entity_type.clone();
        Callback::new(move |new_description: String| {
            let PendingAction::Update(property) = pending.get_untracked() else {
                return;
            };
            let next = with_description(
                &custom_properties.get_untracked(),
                &property.name,
                &new_description,
            );
            let save = update_entity_type(next);
            spawn_local(async move {
                // The editor closes only once the save settles; a failed
                // save leaves it open.
                match save.await {
                    Ok(()) => pending.set(PendingAction::Idle),
                    Err(e) => {
                        log::error!("failed to update property '{}': {}", property.name, e)
                    }
                }
            });
        })
    };

    let handle_delete_confirm = {
        let update_entity_type = update_entity_type.clone();
        Callback::new(move |_: ()| {
            let PendingAction::Delete(property) = pending.get_untracked() else {
                return;
            };
            let next = without_property(&custom_properties.get_untracked(), &property.name);
            let save = update_entity_type(next);
            spawn_local(async move {
                if let Err(e) = save.await {
                    log::error!("failed to delete property '{}': {}", property.name, e);
                }
            });
            // Deletion does not wait for the save; the dialog closes at once.
            pending.set(PendingAction::Idle);
        })
    };

    let handle_cancel = Callback::new(move |_: ()| pending.set(PendingAction::Idle));

    view! {
        <div class="table">
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Type"</th>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let properties = custom_properties.get();
                        let count = properties.len();
                        if count == 0 {
                            return view! {
                                <tr class="table__row table__row--last">
                                    <td class="table__cell table__cell--empty" colspan="4">
                                        "No data"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        properties
                            .into_iter()
                            .enumerate()
                            .map(|(index, property)| {
                                let row_class = if index % 2 == 0 {
                                    "table__row table__row--odd"
                                } else {
                                    "table__row"
                                };
                                let is_last = index + 1 == count;
                                let edit_target = property.clone();
                                let delete_target = property.clone();
                                view! {
                                    <tr class=row_class class:table__row--last=is_last>
                                        <td class="table__cell">{property.name.clone()}</td>
                                        <td class="table__cell">
                                            {property.property_type.display_title()}
                                        </td>
                                        <td class="table__cell">
                                            {match &property.description {
                                                Some(description) if !description.trim().is_empty() => {
                                                    view! { <MarkdownPreview source=description.clone() /> }
                                                        .into_any()
                                                }
                                                _ => {
                                                    view! {
                                                        <span class="table__cell-placeholder">
                                                            "No description"
                                                        </span>
                                                    }
                                                        .into_any()
                                                }
                                            }}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                type="button"
                                                class="table__action-button"
                                                disabled=move || !has_access.get()
                                                title=move || {
                                                    if has_access.get() {
                                                        "Edit".to_string()
                                                    } else {
                                                        NO_PERMISSION_FOR_ACTION.to_string()
                                                    }
                                                }
                                                on:click=move |_| {
                                                    if has_access.get_untracked() {
                                                        pending.set(PendingAction::Update(edit_target.clone()));
                                                    }
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                type="button"
                                                class="table__action-button"
                                                disabled=move || !has_access.get()
                                                title=move || {
                                                    if has_access.get() {
                                                        "Delete".to_string()
                                                    } else {
                                                        NO_PERMISSION_FOR_ACTION.to_string()
                                                    }
                                                }
                                                on:click=move |_| {
                                                    if has_access.get_untracked() {
                                                        pending.set(PendingAction::Delete(delete_target.clone()));
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
        // Which dialog is mounted follows directly from the pending action;
        // the two can never show at the same time.
        {move || match pending.get() {
            PendingAction::Delete(property) => {
                view! {
                    <ConfirmationModal
                        header=format!("Delete property {}", property.name)
                        body_text=format!(
                            "Are you sure you want to delete the property {}?",
                            property.name,
                        )
                        cancel_text="Cancel"
                        confirm_text="Confirm"
                        on_cancel=handle_cancel
                        on_confirm=handle_delete_confirm
                    />
                }
                    .into_any()
            }
            PendingAction::Update(property) => {
                view! {
                    <MarkdownEditorModal
                        header=format!("Edit property: \"{}\"", property.name)
                        placeholder="Enter property description"
                        value=property.description.clone().unwrap_or_default()
                        on_save=handle_update_save
                        on_cancel=handle_cancel
                    />
                }
                    .into_any()
            }
            PendingAction::Idle => view! {}.into_any(),
        }}
    }
}

use leptos::prelude::*;

use crate::shared::components::markdown_preview::MarkdownPreview;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::modal_frame::ModalFrame;

/// Modal markdown editor with Write/Preview tabs.
///
/// `on_save` receives the edited text; `on_cancel` abandons the edit
/// (overlay click cancels too). The dialog does not close itself on save —
/// the owner decides when the pending edit is finished.
#[component]
pub fn MarkdownEditorModal(
    /// Dialog title
    #[prop(into)]
    header: String,
    /// Placeholder for the empty editor
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Initial markdown text
    #[prop(optional)]
    value: String,
    on_save: Callback<String>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(value);
    let preview_mode = RwSignal::new(false);

    view! {
        <ModalFrame on_close=on_cancel modal_class="markdown-editor-modal">
            <div class="modal__header">
                <h2 class="modal__title">{header}</h2>
            </div>
            <div class="modal__body">
                <div class="markdown-editor__tabs">
                    <button
                        type="button"
                        class="markdown-editor__tab"
                        class:markdown-editor__tab--active=move || !preview_mode.get()
                        on:click=move |_| preview_mode.set(false)
                    >
                        "Write"
                    </button>
                    <button
                        type="button"
                        class="markdown-editor__tab"
                        class:markdown-editor__tab--active=move || preview_mode.get()
                        on:click=move |_| preview_mode.set(true)
                    >
                        "Preview"
                    </button>
                </div>
                {move || {
                    if preview_mode.get() {
                        view! {
                            <div class="markdown-editor__preview">
                                <MarkdownPreview source=draft.get() />
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Textarea
                                value=Signal::derive(move || draft.get())
                                on_input=Callback::new(move |text| draft.set(text))
                                placeholder=placeholder.get().unwrap_or_default()
                                rows=10
                                class="markdown-editor__textarea"
                            />
                        }
                        .into_any()
                    }
                }}
            </div>
            <div class="modal__footer">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(move |_| on_save.run(draft.get()))>
                    "Save"
                </Button>
            </div>
        </ModalFrame>
    }
}

use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::modal_frame::ModalFrame;

/// Blocking yes/no dialog.
///
/// Overlay click and the cancel button both run `on_cancel`; only the
/// confirm button runs `on_confirm`.
#[component]
pub fn ConfirmationModal(
    /// Dialog title
    header: String,
    /// Question shown in the dialog body
    body_text: String,
    /// Cancel button label (default "Cancel")
    #[prop(optional, into)]
    cancel_text: MaybeProp<String>,
    /// Confirm button label (default "Confirm")
    #[prop(optional, into)]
    confirm_text: MaybeProp<String>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalFrame on_close=on_cancel modal_class="confirmation-modal">
            <div class="modal__header">
                <h2 class="modal__title">{header}</h2>
            </div>
            <div class="modal__body">
                <p class="modal__text">{body_text}</p>
            </div>
            <div class="modal__footer">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    {move || cancel_text.get().unwrap_or_else(|| "Cancel".to_string())}
                </Button>
                <Button
                    variant="danger"
                    on_click=Callback::new(move |_| on_confirm.run(()))
                >
                    {move || confirm_text.get().unwrap_or_else(|| "Confirm".to_string())}
                </Button>
            </div>
        </ModalFrame>
    }
}

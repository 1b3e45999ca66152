use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogActions, AlertDialogCancel, AlertDialogContent, AlertDialogDescription,
    AlertDialogRoot, AlertDialogTitle,
};

use crate::components::{Button, ButtonVariant};

/// Confirmation prompt, shown while mounted. While `busy` the confirm button
/// is disabled and dismissing is ignored; closing is left to the owner of the
/// dialog state.
#[component]
pub fn ConfirmModal(
    heading: String,
    message: String,
    confirm_label: String,
    #[props(default)] danger: bool,
    #[props(default)] busy: bool,
    #[props(default)] error: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let variant = if danger { ButtonVariant::Danger } else { ButtonVariant::Primary };
    let confirm_text = if busy { "Working...".to_string() } else { confirm_label };

    rsx! {
        AlertDialogRoot {
            class: "modal-backdrop",
            open: true,
            on_open_change: move |open: bool| {
                if !open && !busy {
                    on_cancel.call(());
                }
            },
            AlertDialogContent {
                class: "modal-card",
                AlertDialogTitle { "{heading}" }
                AlertDialogDescription { "{message}" }
                if let Some(error) = &error {
                    p { class: "field-error", role: "alert", "{error}" }
                }
                AlertDialogActions {
                    class: "modal-actions",
                    AlertDialogCancel { class: "btn btn-outline", "Cancel" }
                    // Not an AlertDialogAction: that one closes the dialog before the
                    // owner has moved it to executing.
                    Button {
                        variant,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}

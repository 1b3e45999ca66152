use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaInbox, FaSpinner};
use crate::Icon;

#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "state state-loading",
            role: "status",
            span { class: "spin", Icon { icon: FaSpinner, width: 20, height: 20 } }
            p { "{message}" }
        }
    }
}

/// Failure message with an optional retry button.
#[component]
pub fn ErrorState(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "state state-error",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 20, height: 20 }
            p { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "state state-empty",
            Icon { icon: FaInbox, width: 20, height: 20 }
            p { "{message}" }
            {children}
        }
    }
}

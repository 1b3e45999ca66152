use dioxus::prelude::*;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Hosts the toast stack. Mount it above the router so a toast raised just
/// before a navigation stays on screen.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        dioxus_primitives::toast::ToastProvider { {children} }
    }
}

use dioxus::prelude::*;

use crate::icons::FaArrowLeft;
use crate::Icon;

/// Page title row with an optional back link and trailing actions.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        header {
            class: "page-header",
            div {
                class: "page-header-title",
                if let Some(back) = on_back {
                    button {
                        class: "btn btn-ghost",
                        title: "Back",
                        onclick: move |_| back.call(()),
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    }
                }
                div {
                    h1 { "{title}" }
                    if let Some(subtitle) = &subtitle {
                        p { class: "muted", "{subtitle}" }
                    }
                }
            }
            div { class: "page-header-actions", {children} }
        }
    }
}

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_login_success: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

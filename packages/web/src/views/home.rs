use dioxus::prelude::*;
use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_report_list: move |_| {
                nav.push(Route::ReportList {});
            },
            on_report_create: move |_| {
                nav.push(Route::ReportCreate {});
            },
            on_supervisor: move |_| {
                nav.push(Route::Supervisor {});
            },
            on_logged_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

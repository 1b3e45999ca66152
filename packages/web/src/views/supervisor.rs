use dioxus::prelude::*;
use ui::views::SupervisorDashboardView;

use crate::Route;

#[component]
pub fn Supervisor() -> Element {
    let nav = use_navigator();
    rsx! {
        SupervisorDashboardView {
            on_view: move |id| {
                nav.push(Route::ReportDetail { id });
            },
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

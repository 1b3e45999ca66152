use dioxus::prelude::*;
use store::ReportStatus;

#[component]
pub fn StatusBadge(status: ReportStatus) -> Element {
    let class = match status {
        ReportStatus::Draft => "badge badge-draft",
        ReportStatus::Submitted => "badge badge-submitted",
    };
    rsx! {
        span { class, "{status.label()}" }
    }
}

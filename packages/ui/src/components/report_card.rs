use dioxus::prelude::*;
use store::dates::{format_date, format_timestamp};
use store::DailyReport;

use crate::components::StatusBadge;
use crate::icons::{FaEye, FaPenToSquare, FaTrashCan};
use crate::Icon;

/// Longest excerpt of the work content shown on a card.
const EXCERPT_CHARS: usize = 120;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// Summary of one report with its actions. Edit and delete only appear when
/// the matching handler is given.
#[component]
pub fn ReportCard(
    report: DailyReport,
    #[props(default)] show_author: bool,
    on_view: EventHandler<i64>,
    on_edit: Option<EventHandler<i64>>,
    on_delete: Option<EventHandler<i64>>,
) -> Element {
    let id = report.id;
    let date = format_date(report.report_date);
    let author = report.author_name().to_string();
    let created = format_timestamp(&report.created_at);
    let summary = excerpt(&report.work_content);
    rsx! {
        article {
            class: "report-card",
            div {
                class: "report-card-header",
                h3 { "{report.title}" }
                StatusBadge { status: report.status }
            }
            p {
                class: "muted",
                "{date}"
                if show_author {
                    " · {author}"
                }
            }
            p { class: "report-card-excerpt", "{summary}" }
            div {
                class: "report-card-footer",
                span { class: "muted small", "Created {created}" }
                div {
                    class: "report-card-actions",
                    button {
                        class: "btn btn-ghost",
                        title: "View",
                        onclick: move |_| on_view.call(id),
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                    if let Some(edit) = on_edit {
                        button {
                            class: "btn btn-ghost",
                            title: "Edit",
                            onclick: move |_| edit.call(id),
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                    }
                    if let Some(delete) = on_delete {
                        button {
                            class: "btn btn-ghost danger",
                            title: "Delete",
                            onclick: move |_| delete.call(id),
                            Icon { icon: FaTrashCan, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_keeps_short_text() {
        assert_eq!(excerpt("Short"), "Short");
    }

    #[test]
    fn excerpt_cuts_on_characters() {
        let long = "報".repeat(EXCERPT_CHARS + 5);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
    }
}

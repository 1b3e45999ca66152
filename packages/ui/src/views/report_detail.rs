use api::ReportApi;
use dioxus::prelude::*;
use store::dates::{format_date, format_optional_timestamp, format_timestamp};
use store::{DailyReport, ReportStatus};

use super::Loadable;
use crate::actions::{change_status_confirmed, delete_confirmed};
use crate::components::{
    Button, ButtonVariant, ConfirmModal, ErrorState, LoadingState, PageHeader, StatusBadge,
};
use crate::dialog::{ConfirmDialog, DeleteTarget, StatusChangeTarget};
use crate::icons::{FaPaperPlane, FaPenToSquare, FaRotateLeft, FaTrashCan};
use crate::messages;
use crate::session::use_app;
use crate::Icon;

/// One report with status and delete actions for its owner or an admin.
#[component]
pub fn ReportDetailView(
    report_id: i64,
    on_edit: EventHandler<i64>,
    on_back: EventHandler<()>,
    /// Called after the report was deleted.
    on_deleted: EventHandler<()>,
) -> Element {
    let app = use_app();

    let mut id_signal = use_signal(|| report_id);
    if *id_signal.peek() != report_id {
        id_signal.set(report_id);
    }

    let mut report = use_signal(Loadable::<DailyReport>::default);
    let mut status_dialog = use_signal(ConfirmDialog::<StatusChangeTarget>::default);
    let mut delete_dialog = use_signal(ConfirmDialog::<DeleteTarget>::default);

    let mut loader = use_resource(move || {
        let id = id_signal();
        async move {
            report.set(Loadable::Loading);
            match app.api().get_daily_report(id).await {
                Ok(Some(found)) => report.set(Loadable::Loaded(found)),
                Ok(None) => {
                    tracing::warn!("Report {} not found", id);
                    report.set(Loadable::Failed(messages::REPORT_NOT_FOUND.to_string()));
                }
                Err(e) => {
                    app.report_error(messages::LOAD_REPORT_FAILED, &e);
                    report.set(Loadable::Failed(e.to_string()));
                }
            }
        }
    });

    let open_status = move |_: MouseEvent| {
        if let Some(current) = report.read().loaded() {
            status_dialog.write().open_for(std::slice::from_ref(current), current.id);
        }
    };
    let open_delete = move |_: MouseEvent| {
        if let Some(current) = report.read().loaded() {
            delete_dialog.write().open_for(std::slice::from_ref(current), current.id);
        }
    };
    let confirm_status = move |_: ()| {
        let Some(current) = report.peek().loaded().cloned() else {
            return;
        };
        spawn(async move {
            let api = app.api();
            let mut dialog = status_dialog;
            if let Some(updated) = change_status_confirmed(&api, &mut dialog, &current, &app).await {
                report.set(Loadable::Loaded(updated));
            }
        });
    };
    let confirm_delete = move |_: ()| {
        spawn(async move {
            let api = app.api();
            let mut dialog = delete_dialog;
            if delete_confirmed(&api, &mut dialog, &app).await {
                on_deleted.call(());
            }
        });
    };

    let current = match report() {
        Loadable::Loading => {
            return rsx! {
                div {
                    class: "page",
                    PageHeader { title: "Report", on_back: move |_| on_back.call(()) }
                    LoadingState { message: "Loading report..." }
                }
            };
        }
        Loadable::Failed(message) => {
            return rsx! {
                div {
                    class: "page",
                    PageHeader { title: "Report", on_back: move |_| on_back.call(()) }
                    ErrorState { message, on_retry: move |_| loader.restart() }
                }
            };
        }
        Loadable::Loaded(current) => current,
    };

    let can_modify = app.user().is_some_and(|user| current.can_be_modified_by(&user));
    let date = format_date(current.report_date);
    let author = current.author_name().to_string();
    let created = format_timestamp(&current.created_at);
    let updated = format_optional_timestamp(current.updated_at.as_deref());
    let submitted = format_optional_timestamp(current.submitted_at.as_deref());
    let is_draft = current.status == ReportStatus::Draft;
    let id = current.id;

    let (status_variant, status_label) = if is_draft {
        (ButtonVariant::Primary, " Submit")
    } else {
        (ButtonVariant::Secondary, " Return to draft")
    };

    let status_view = status_dialog.read().clone();
    let status_prompt = status_view.target().map(|target| {
        let title = status_view.title().unwrap_or_default();
        if target.is_submit() {
            (
                "Submit report",
                format!("Submit \"{title}\"? Your supervisor will be able to review it."),
                "Submit",
            )
        } else {
            (
                "Return to draft",
                format!("Return \"{title}\" to draft? It will no longer count as submitted."),
                "Return to draft",
            )
        }
    });
    let delete_view = delete_dialog.read().clone();

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: current.title.clone(),
                subtitle: format!("{date} · {author}"),
                on_back: move |_| on_back.call(()),
                if can_modify {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_edit.call(id),
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        " Edit"
                    }
                    Button {
                        variant: status_variant,
                        onclick: open_status,
                        if is_draft {
                            Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaRotateLeft, width: 14, height: 14 }
                        }
                        "{status_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: open_delete,
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        " Delete"
                    }
                }
            }
            article {
                class: "report-detail",
                div {
                    class: "report-meta",
                    StatusBadge { status: current.status }
                    span { class: "muted small", "Created {created}" }
                    if let Some(updated) = updated {
                        span { class: "muted small", "Updated {updated}" }
                    }
                    if let Some(submitted) = submitted {
                        span { class: "muted small", "Submitted {submitted}" }
                    }
                }
                h2 { "Work content" }
                p { class: "report-content", "{current.work_content}" }
            }
        }
        if let Some((heading, message, confirm_label)) = status_prompt {
            ConfirmModal {
                heading,
                message,
                confirm_label,
                busy: status_view.is_executing(),
                error: status_view.error().map(str::to_string),
                on_confirm: confirm_status,
                on_cancel: move |_| {
                    status_dialog.write().cancel();
                },
            }
        }
        if delete_view.is_open() {
            ConfirmModal {
                heading: "Delete report",
                message: format!("Delete \"{}\"? This cannot be undone.", delete_view.title().unwrap_or_default()),
                confirm_label: "Delete",
                danger: true,
                busy: delete_view.is_executing(),
                error: delete_view.error().map(str::to_string),
                on_confirm: confirm_delete,
                on_cancel: move |_| {
                    delete_dialog.write().cancel();
                },
            }
        }
    }
}

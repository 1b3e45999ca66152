use api::ReportApi;
use dioxus::prelude::*;
use store::{filter_reports, DailyReport, ReportListParams, SearchCriteria, StatusFilter};

use super::Loadable;
use crate::actions::delete_confirmed;
use crate::components::{
    Button, ConfirmModal, EmptyState, ErrorState, LoadingState, PageHeader, ReportCard, SearchForm,
    StatusFilterSelect,
};
use crate::dialog::{ConfirmDialog, DeleteTarget};
use crate::icons::FaPlus;
use crate::messages;
use crate::session::use_app;
use crate::Icon;

/// The signed-in user's own reports with filtering and delete.
#[component]
pub fn ReportListView(
    on_view: EventHandler<i64>,
    on_edit: EventHandler<i64>,
    on_create: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    let app = use_app();
    let mut reports = use_signal(Loadable::<Vec<DailyReport>>::default);
    let mut status = use_signal(StatusFilter::default);
    let mut criteria = use_signal(SearchCriteria::default);
    let mut delete_dialog = use_signal(ConfirmDialog::<DeleteTarget>::default);

    let mut loader = use_resource(move || async move {
        reports.set(Loadable::Loading);
        match app.api().get_daily_reports(&ReportListParams::default()).await {
            Ok(list) => {
                tracing::debug!("Loaded {} reports", list.len());
                reports.set(Loadable::Loaded(list));
            }
            Err(e) => {
                app.report_error(messages::LOAD_REPORTS_FAILED, &e);
                reports.set(Loadable::Failed(e.to_string()));
            }
        }
    });

    let filtered = use_memo(move || match reports.read().loaded() {
        Some(list) => filter_reports(list, status(), &criteria.read()),
        None => Vec::new(),
    });

    let mut open_delete = move |id: i64| {
        if let Some(list) = reports.read().loaded() {
            delete_dialog.write().open_for(list, id);
        }
    };

    let confirm_delete = move |_: ()| {
        spawn(async move {
            let api = app.api();
            let mut dialog = delete_dialog;
            if delete_confirmed(&api, &mut dialog, &app).await {
                loader.restart();
            }
        });
    };

    let dialog = delete_dialog.read().clone();
    let total = reports.read().loaded().map_or(0, Vec::len);
    let shown = filtered.read().len();

    let body = match &*reports.read() {
        Loadable::Loading => rsx! { LoadingState { message: "Loading reports..." } },
        Loadable::Failed(message) => rsx! {
            ErrorState {
                message: format!("{}: {message}", messages::LOAD_REPORTS_FAILED),
                on_retry: move |_| loader.restart(),
            }
        },
        Loadable::Loaded(list) if list.is_empty() => rsx! {
            EmptyState {
                message: messages::NO_REPORTS,
                Button { onclick: move |_| on_create.call(()), "Write your first report" }
            }
        },
        Loadable::Loaded(_) if shown == 0 => rsx! {
            EmptyState { message: messages::NO_MATCHES }
        },
        Loadable::Loaded(_) => rsx! {
            div {
                class: "report-grid",
                for report in filtered() {
                    ReportCard {
                        key: "{report.id}",
                        report: report.clone(),
                        on_view: on_view,
                        on_edit: move |id| on_edit.call(id),
                        on_delete: move |id| open_delete(id),
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "My reports",
                on_back: move |_| on_home.call(()),
                Button {
                    onclick: move |_| on_create.call(()),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " New report"
                }
            }
            div {
                class: "toolbar",
                StatusFilterSelect { value: status(), on_change: move |filter| status.set(filter) }
                if total > 0 {
                    span { class: "muted", "Showing {shown} of {total}" }
                }
            }
            SearchForm { criteria: criteria(), on_change: move |next| criteria.set(next) }
            {body}
        }
        if dialog.is_open() {
            ConfirmModal {
                heading: "Delete report",
                message: format!("Delete \"{}\"? This cannot be undone.", dialog.title().unwrap_or_default()),
                confirm_label: "Delete",
                danger: true,
                busy: dialog.is_executing(),
                error: dialog.error().map(str::to_string),
                on_confirm: confirm_delete,
                on_cancel: move |_| {
                    delete_dialog.write().cancel();
                },
            }
        }
    }
}

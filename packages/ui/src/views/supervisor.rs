use api::{ApiError, ReportApi};
use dioxus::prelude::*;
use store::{filter_reports, DailyReport, SearchCriteria, StatusFilter};

use super::Loadable;
use crate::components::{
    EmptyState, ErrorState, LoadingState, PageHeader, ReportCard, SearchForm, StatusFilterSelect,
};
use crate::messages;
use crate::session::use_app;

/// Reports written by the signed-in supervisor's team. Admins see every
/// report but their own.
#[component]
pub fn SupervisorDashboardView(on_view: EventHandler<i64>, on_home: EventHandler<()>) -> Element {
    let app = use_app();
    let allowed = app.user().is_some_and(|user| user.role.can_review_team());

    let mut reports = use_signal(Loadable::<Vec<DailyReport>>::default);
    let mut status = use_signal(StatusFilter::default);
    let mut criteria = use_signal(SearchCriteria::default);

    let mut loader = use_resource(move || async move {
        if !allowed {
            reports.set(Loadable::Failed(messages::TEAM_FORBIDDEN.to_string()));
            return;
        }
        reports.set(Loadable::Loading);
        match app.api().get_subordinate_reports(None).await {
            Ok(list) => {
                tracing::debug!("Loaded {} team reports", list.len());
                reports.set(Loadable::Loaded(list));
            }
            Err(ApiError::Forbidden) => {
                tracing::warn!("Team reports refused for the current user");
                reports.set(Loadable::Failed(messages::TEAM_FORBIDDEN.to_string()));
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

    let total = reports.read().loaded().map_or(0, Vec::len);
    let shown = filtered.read().len();

    let body = match &*reports.read() {
        Loadable::Loading => rsx! { LoadingState { message: "Loading team reports..." } },
        Loadable::Failed(message) if !allowed => rsx! { ErrorState { message: message.clone() } },
        Loadable::Failed(message) => rsx! {
            ErrorState { message: message.clone(), on_retry: move |_| loader.restart() }
        },
        Loadable::Loaded(list) if list.is_empty() => rsx! {
            EmptyState { message: messages::NO_TEAM_REPORTS }
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
                        show_author: true,
                        on_view: move |id| on_view.call(id),
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "page",
            PageHeader {
                title: "Team reports",
                subtitle: "Reports written by the members you supervise".to_string(),
                on_back: move |_| on_home.call(()),
            }
            if allowed {
                div {
                    class: "toolbar",
                    StatusFilterSelect { value: status(), on_change: move |filter| status.set(filter) }
                    if total > 0 {
                        span { class: "muted", "Showing {shown} of {total}" }
                    }
                }
                SearchForm { criteria: criteria(), on_change: move |next| criteria.set(next) }
            }
            {body}
        }
    }
}

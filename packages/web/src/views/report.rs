//! Report pages: list, create, edit and detail.

use dioxus::prelude::*;
use ui::views::{ReportDetailView, ReportFormView, ReportListView};

use crate::Route;

#[component]
pub fn ReportList() -> Element {
    let nav = use_navigator();
    rsx! {
        ReportListView {
            on_view: move |id| {
                nav.push(Route::ReportDetail { id });
            },
            on_edit: move |id| {
                nav.push(Route::ReportEdit { id });
            },
            on_create: move |_| {
                nav.push(Route::ReportCreate {});
            },
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
pub fn ReportCreate() -> Element {
    let nav = use_navigator();
    rsx! {
        ReportFormView {
            on_saved: move |id| {
                nav.replace(Route::ReportDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::ReportList {});
            },
        }
    }
}

#[component]
pub fn ReportEdit(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        ReportFormView {
            report_id: id,
            on_saved: move |id| {
                nav.replace(Route::ReportDetail { id });
            },
            on_cancel: move |_| {
                nav.push(Route::ReportDetail { id });
            },
        }
    }
}

#[component]
pub fn ReportDetail(id: i64) -> Element {
    let nav = use_navigator();
    rsx! {
        ReportDetailView {
            report_id: id,
            on_edit: move |id| {
                nav.push(Route::ReportEdit { id });
            },
            on_back: move |_| {
                nav.push(Route::ReportList {});
            },
            on_deleted: move |_| {
                nav.replace(Route::ReportList {});
            },
        }
    }
}

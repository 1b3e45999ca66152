use api::ReportApi;
use dioxus::prelude::*;
use store::validation::{Field, TITLE_MAX_CHARS, WORK_CONTENT_MAX_CHARS};
use store::{FieldErrors, ReportForm, ReportStatus};

use super::Loadable;
use crate::components::{Button, ButtonVariant, ErrorState, LoadingState, PageHeader, TextAreaField, TextField};
use crate::messages;
use crate::session::use_app;
use crate::NoticeLevel;

/// Create a report, or edit the one with `report_id`.
///
/// Edit mode loads the report before showing the form. Saving either keeps the
/// report a draft or submits it; on failure the typed values stay in place.
#[component]
pub fn ReportFormView(
    #[props(default)] report_id: Option<i64>,
    /// Called with the id of the saved report.
    on_saved: EventHandler<i64>,
    on_cancel: EventHandler<()>,
) -> Element {
    let app = use_app();

    // Track the id in a signal so the loader re-runs when the route changes
    let mut id_signal = use_signal(|| report_id);
    if *id_signal.peek() != report_id {
        id_signal.set(report_id);
    }

    let mut form = use_signal(|| ReportForm::for_date(chrono::Local::now().date_naive()));
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| None::<ReportStatus>);
    let mut loaded = use_signal(|| Loadable::<()>::Loading);

    let mut loader = use_resource(move || {
        let id = id_signal();
        async move {
            let Some(id) = id else {
                loaded.set(Loadable::Loaded(()));
                return;
            };
            loaded.set(Loadable::Loading);
            match app.api().get_daily_report(id).await {
                Ok(Some(report)) => {
                    let editable = app.user().is_some_and(|user| report.can_be_modified_by(&user));
                    if editable {
                        form.set(ReportForm::from_report(&report));
                        errors.set(FieldErrors::new());
                        loaded.set(Loadable::Loaded(()));
                    } else {
                        tracing::warn!("Report {} is not editable by the current user", id);
                        loaded.set(Loadable::Failed(messages::REPORT_NOT_FOUND.to_string()));
                    }
                }
                Ok(None) => {
                    tracing::warn!("Report {} not found", id);
                    loaded.set(Loadable::Failed(messages::REPORT_NOT_FOUND.to_string()));
                }
                Err(e) => {
                    app.report_error(messages::LOAD_REPORT_FAILED, &e);
                    loaded.set(Loadable::Failed(e.to_string()));
                }
            }
        }
    });

    let mut save = move |status: ReportStatus| {
        if saving().is_some() {
            return;
        }
        let draft = match form.read().validate(status) {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                app.notify(NoticeLevel::Warning, messages::FIX_FORM_ERRORS, None);
                return;
            }
        };
        errors.set(FieldErrors::new());
        saving.set(Some(status));

        let id = id_signal();
        spawn(async move {
            let api = app.api();
            let result = match id {
                Some(id) => api.update_daily_report(id, &draft).await,
                None => api.create_daily_report(&draft).await,
            };
            saving.set(None);
            match result {
                Ok(report) => {
                    let title = if id.is_some() { messages::REPORT_UPDATED } else { messages::REPORT_CREATED };
                    tracing::info!("Saved report {} as {}", report.id, report.status.as_str());
                    app.notify(NoticeLevel::Success, title, Some(&report.title));
                    on_saved.call(report.id);
                }
                Err(e) => app.report_error(messages::SAVE_FAILED, &e),
            }
        });
    };

    let editing = report_id.is_some();
    let heading = if editing { "Edit report" } else { "New report" };

    let body = match loaded() {
        Loadable::Loading => rsx! { LoadingState { message: "Loading report..." } },
        Loadable::Failed(message) => rsx! {
            ErrorState { message, on_retry: move |_| loader.restart() }
        },
        Loadable::Loaded(()) => {
            let current = form();
            let busy = saving();
            let disabled = busy.is_some();
            rsx! {
                form {
                    class: "report-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        save(ReportStatus::Draft);
                    },
                    TextField {
                        id: "report-date",
                        label: "Date",
                        input_type: "date",
                        value: current.report_date.clone(),
                        required: true,
                        disabled,
                        error: errors.read().get(Field::ReportDate).map(str::to_string),
                        oninput: move |value: String| form.write().report_date = value,
                    }
                    TextField {
                        id: "report-title",
                        label: "Title",
                        value: current.title.clone(),
                        placeholder: format!("Up to {TITLE_MAX_CHARS} characters"),
                        required: true,
                        disabled,
                        error: errors.read().get(Field::Title).map(str::to_string),
                        oninput: move |value: String| form.write().title = value,
                    }
                    TextAreaField {
                        id: "report-content",
                        label: "Work content",
                        value: current.work_content.clone(),
                        max_chars: WORK_CONTENT_MAX_CHARS,
                        placeholder: "What did you work on today?",
                        required: true,
                        disabled,
                        error: errors.read().get(Field::WorkContent).map(str::to_string),
                        oninput: move |value: String| form.write().work_content = value,
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            submit: true,
                            disabled,
                            if busy == Some(ReportStatus::Draft) { "Saving..." } else { "Save as draft" }
                        }
                        Button {
                            disabled,
                            onclick: move |_| save(ReportStatus::Submitted),
                            if busy == Some(ReportStatus::Submitted) { "Submitting..." } else { "Submit" }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            PageHeader { title: heading, on_back: move |_| on_cancel.call(()) }
            {body}
        }
    }
}

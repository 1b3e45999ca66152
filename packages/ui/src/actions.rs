//! Confirmed report actions shared by the list and detail pages.
//!
//! Each helper drives a [`ConfirmDialog`](crate::ConfirmDialog) through
//! [`run_confirmed`] and reports the outcome exactly once through a
//! [`Feedback`]: a success notice, or the failure (which also ends the session
//! on an authentication error).

use api::{ApiError, ReportApi};
use store::DailyReport;

use crate::dialog::{run_confirmed, DeleteTarget, DialogCell, StatusChangeTarget};
use crate::messages;

/// Where the outcome of a confirmed action goes.
pub trait Feedback {
    fn succeeded(&self, title: &str);
    fn failed(&self, action: &str, error: &ApiError);
}

/// Delete the target of an open delete dialog. A failure leaves the dialog
/// open with the error. Returns whether the report was deleted.
pub async fn delete_confirmed<A, C, F>(api: &A, dialog: &mut C, feedback: &F) -> bool
where
    A: ReportApi,
    C: DialogCell<DeleteTarget>,
    F: Feedback,
{
    let outcome = run_confirmed(dialog, |target: DeleteTarget| async move {
        api.delete_daily_report(target.id).await.map_err(|e| {
            feedback.failed(messages::DELETE_FAILED, &e);
            e
        })
    })
    .await;

    match outcome {
        Some(Ok(())) => {
            feedback.succeeded(messages::REPORT_DELETED);
            true
        }
        _ => false,
    }
}

/// Submit a draft or return a submitted report to draft, through the open
/// status dialog. Returns the updated report on success.
pub async fn change_status_confirmed<A, C, F>(
    api: &A,
    dialog: &mut C,
    current: &DailyReport,
    feedback: &F,
) -> Option<DailyReport>
where
    A: ReportApi,
    C: DialogCell<StatusChangeTarget>,
    F: Feedback,
{
    let mut changed = None;
    let slot = &mut changed;
    let outcome = run_confirmed(dialog, move |target: StatusChangeTarget| async move {
        let draft = current.draft_with_status(target.to);
        match api.update_daily_report(target.id, &draft).await {
            Ok(updated) => {
                tracing::info!(
                    "Report {} changed from {} to {}",
                    target.id,
                    target.from.as_str(),
                    updated.status.as_str()
                );
                *slot = Some((target.is_submit(), updated));
                Ok(())
            }
            Err(e) => {
                feedback.failed(messages::STATUS_CHANGE_FAILED, &e);
                Err(e)
            }
        }
    })
    .await;

    match (outcome, changed) {
        (Some(Ok(())), Some((submitted, updated))) => {
            let title = if submitted { messages::REPORT_SUBMITTED } else { messages::REPORT_WITHDRAWN };
            feedback.succeeded(title);
            Some(updated)
        }
        (None, _) => {
            tracing::debug!("Status dialog was not open");
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use api::MockApi;
    use store::{MemoryStore, ReportListParams, ReportStatus, TokenStore};

    use super::*;
    use crate::dialog::ConfirmDialog;

    #[derive(Default)]
    struct Recorded {
        successes: RefCell<Vec<String>>,
        failures: RefCell<Vec<(String, ApiError)>>,
    }

    impl Feedback for Recorded {
        fn succeeded(&self, title: &str) {
            self.successes.borrow_mut().push(title.to_string());
        }

        fn failed(&self, action: &str, error: &ApiError) {
            self.failures.borrow_mut().push((action.to_string(), error.clone()));
        }
    }

    async fn signed_in(username: &str) -> MockApi<MemoryStore> {
        let tokens = TokenStore::new(MemoryStore::new());
        let api = MockApi::new(tokens.clone()).with_latency(Duration::ZERO);
        let response = api.login(username, "password").await.unwrap();
        tokens.set(&response.token).unwrap();
        api
    }

    /// Every seeded report, so a dialog can open on any id.
    async fn all_reports() -> Vec<DailyReport> {
        let mut reports = signed_in("employee1")
            .await
            .get_daily_reports(&ReportListParams::default())
            .await
            .unwrap();
        reports.extend(
            signed_in("employee2")
                .await
                .get_daily_reports(&ReportListParams::default())
                .await
                .unwrap(),
        );
        reports
    }

    #[tokio::test]
    async fn delete_of_own_report_closes_and_notifies_once() {
        let api = signed_in("employee1").await;
        let reports = all_reports().await;
        let mut dialog = ConfirmDialog::<DeleteTarget>::default();
        assert!(dialog.open_for(&reports, 1));
        let feedback = Recorded::default();

        assert!(delete_confirmed(&api, &mut dialog, &feedback).await);
        assert_eq!(dialog, ConfirmDialog::Closed);
        assert_eq!(*feedback.successes.borrow(), vec![messages::REPORT_DELETED.to_string()]);
        assert!(feedback.failures.borrow().is_empty());
        assert_eq!(api.get_daily_report(1).await, Ok(None));
    }

    #[tokio::test]
    async fn delete_of_foreign_report_stays_open_with_error() {
        let api = signed_in("employee1").await;
        let reports = all_reports().await;
        let mut dialog = ConfirmDialog::<DeleteTarget>::default();
        // Report 9 belongs to employee2
        assert!(dialog.open_for(&reports, 9));
        let feedback = Recorded::default();

        assert!(!delete_confirmed(&api, &mut dialog, &feedback).await);
        assert!(dialog.is_open());
        assert!(!dialog.is_executing());
        assert_eq!(dialog.error(), Some(ApiError::NotFound.to_string().as_str()));
        assert!(feedback.successes.borrow().is_empty());
        assert_eq!(
            *feedback.failures.borrow(),
            vec![(messages::DELETE_FAILED.to_string(), ApiError::NotFound)]
        );
    }

    #[tokio::test]
    async fn delete_on_closed_dialog_does_nothing() {
        let api = signed_in("employee1").await;
        let mut dialog = ConfirmDialog::<DeleteTarget>::default();
        let feedback = Recorded::default();

        assert!(!delete_confirmed(&api, &mut dialog, &feedback).await);
        assert!(feedback.successes.borrow().is_empty());
        assert!(feedback.failures.borrow().is_empty());
        assert!(api.get_daily_report(1).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn submitting_a_draft_returns_the_update() {
        let api = signed_in("employee1").await;
        let reports = all_reports().await;
        let draft = reports.iter().find(|r| r.id == 2).unwrap().clone();
        assert_eq!(draft.status, ReportStatus::Draft);
        let mut dialog = ConfirmDialog::<StatusChangeTarget>::default();
        assert!(dialog.open_for(&reports, 2));
        let feedback = Recorded::default();

        let updated = change_status_confirmed(&api, &mut dialog, &draft, &feedback)
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Submitted);
        assert!(updated.submitted_at.is_some());
        assert_eq!(dialog, ConfirmDialog::Closed);
        assert_eq!(*feedback.successes.borrow(), vec![messages::REPORT_SUBMITTED.to_string()]);
        assert!(feedback.failures.borrow().is_empty());
    }

    #[tokio::test]
    async fn withdrawing_a_submitted_report_notifies_withdrawn() {
        let api = signed_in("employee1").await;
        let reports = all_reports().await;
        let submitted = reports.iter().find(|r| r.id == 1).unwrap().clone();
        let mut dialog = ConfirmDialog::<StatusChangeTarget>::default();
        assert!(dialog.open_for(&reports, 1));
        let feedback = Recorded::default();

        let updated = change_status_confirmed(&api, &mut dialog, &submitted, &feedback)
            .await
            .unwrap();
        assert_eq!(updated.status, ReportStatus::Draft);
        assert_eq!(*feedback.successes.borrow(), vec![messages::REPORT_WITHDRAWN.to_string()]);
    }

    #[tokio::test]
    async fn status_change_on_foreign_report_stays_open_with_error() {
        let api = signed_in("employee1").await;
        let reports = all_reports().await;
        let foreign = reports.iter().find(|r| r.id == 9).unwrap().clone();
        let mut dialog = ConfirmDialog::<StatusChangeTarget>::default();
        assert!(dialog.open_for(&reports, 9));
        let feedback = Recorded::default();

        let updated = change_status_confirmed(&api, &mut dialog, &foreign, &feedback).await;
        assert_eq!(updated, None);
        assert!(dialog.is_open());
        assert!(dialog.error().is_some());
        assert!(feedback.successes.borrow().is_empty());
        assert_eq!(
            *feedback.failures.borrow(),
            vec![(messages::STATUS_CHANGE_FAILED.to_string(), ApiError::NotFound)]
        );
    }
}

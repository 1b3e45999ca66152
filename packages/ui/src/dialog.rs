//! Confirm-then-execute dialogs for deleting a report and changing its status.
//!
//! ```text
//! Closed ──open──▶ Open ──begin──▶ Executing ──finish(Ok)──▶ Closed
//!   ▲               │ ▲                 │
//!   └────cancel─────┘ └──finish(Err)────┘   (error kept for retry)
//! ```
//!
//! Cancel is ignored while executing. The target and title only exist in the
//! states that need them, so "executing while closed" cannot be expressed.

use std::fmt::Display;
use std::future::Future;

use dioxus::prelude::*;
use store::{DailyReport, ReportStatus};

use crate::messages;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfirmDialog<T> {
    Closed,
    Open {
        target: T,
        title: String,
        error: Option<String>,
    },
    Executing {
        target: T,
        title: String,
    },
}

impl<T> Default for ConfirmDialog<T> {
    fn default() -> Self {
        ConfirmDialog::Closed
    }
}

/// What a dialog acts on, captured from the report when it opens.
pub trait DialogTarget: Clone {
    fn from_report(report: &DailyReport) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: i64,
}

impl DialogTarget for DeleteTarget {
    fn from_report(report: &DailyReport) -> Self {
        Self { id: report.id }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusChangeTarget {
    pub id: i64,
    pub from: ReportStatus,
    pub to: ReportStatus,
}

impl StatusChangeTarget {
    pub fn is_submit(&self) -> bool {
        self.to == ReportStatus::Submitted
    }
}

impl DialogTarget for StatusChangeTarget {
    fn from_report(report: &DailyReport) -> Self {
        Self {
            id: report.id,
            from: report.status,
            to: report.status.toggled(),
        }
    }
}

impl<T: Clone> ConfirmDialog<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ConfirmDialog::Closed)
    }

    pub fn is_executing(&self) -> bool {
        matches!(self, ConfirmDialog::Executing { .. })
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            ConfirmDialog::Closed => None,
            ConfirmDialog::Open { target, .. } | ConfirmDialog::Executing { target, .. } => {
                Some(target)
            }
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ConfirmDialog::Closed => None,
            ConfirmDialog::Open { title, .. } | ConfirmDialog::Executing { title, .. } => {
                Some(title)
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ConfirmDialog::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Open → Executing. Returns the target to act on, or `None` from any
    /// other state.
    pub fn begin(&mut self) -> Option<T> {
        let ConfirmDialog::Open { target, title, .. } = self else {
            return None;
        };
        let target = target.clone();
        *self = ConfirmDialog::Executing {
            target: target.clone(),
            title: std::mem::take(title),
        };
        Some(target)
    }

    /// Executing → Closed on success, Executing → Open with the error otherwise.
    pub fn finish(&mut self, result: Result<(), String>) {
        let ConfirmDialog::Executing { target, title } = self else {
            return;
        };
        *self = match result {
            Ok(()) => ConfirmDialog::Closed,
            Err(message) => ConfirmDialog::Open {
                target: target.clone(),
                title: std::mem::take(title),
                error: Some(message),
            },
        };
    }

    /// Close unless executing. Returns whether the dialog closed.
    pub fn cancel(&mut self) -> bool {
        match self {
            ConfirmDialog::Executing { .. } => false,
            _ => {
                *self = ConfirmDialog::Closed;
                true
            }
        }
    }
}

impl<T: DialogTarget> ConfirmDialog<T> {
    /// Open on the report with `id` in `reports`. Does nothing and returns
    /// `false` when it is not there.
    pub fn open_for(&mut self, reports: &[DailyReport], id: i64) -> bool {
        let Some(report) = reports.iter().find(|r| r.id == id) else {
            tracing::debug!("Dialog not opened, report {} is not loaded", id);
            return false;
        };
        if self.is_executing() {
            return false;
        }
        *self = ConfirmDialog::Open {
            target: T::from_report(report),
            title: report.title.clone(),
            error: None,
        };
        true
    }
}

/// Mutable access to dialog state, whether held in a signal or directly.
pub trait DialogCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ConfirmDialog<T>) -> R) -> R;
}

impl<T: 'static> DialogCell<T> for Signal<ConfirmDialog<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ConfirmDialog<T>) -> R) -> R {
        f(&mut *self.write())
    }
}

impl<T> DialogCell<T> for ConfirmDialog<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ConfirmDialog<T>) -> R) -> R {
        f(self)
    }
}

/// Run `action` on the confirmed target and settle the dialog.
///
/// Returns `None` when the dialog was not open, so nothing ran. Otherwise the
/// outcome, with a non-empty message on failure, for the caller to notify once.
pub async fn run_confirmed<T, C, F, Fut, E>(cell: &mut C, action: F) -> Option<Result<(), String>>
where
    T: Clone,
    C: DialogCell<T>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let target = cell.update(|dialog| dialog.begin())?;
    let result = action(target).await.map_err(|e| {
        let message = e.to_string();
        if message.trim().is_empty() {
            messages::OPERATION_FAILED.to_string()
        } else {
            message
        }
    });
    cell.update(|dialog| dialog.finish(result.clone()));
    Some(result)
}

//! Toast notifications.
//!
//! Toasts are drawn by the [`ToastProvider`](crate::components::ToastProvider)
//! at the app root, so a toast outlives the page that raised it. The provider
//! dismisses each one after its default duration or on the close button.

use crate::components::{ToastOptions, Toasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast options for an optional description line.
fn notice_options(description: Option<&str>) -> ToastOptions {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => ToastOptions::new().description(description.to_string()),
        None => ToastOptions::new(),
    }
}

/// Raise a toast at `level`.
pub(crate) fn notify(toasts: Toasts, level: NoticeLevel, title: &str, description: Option<&str>) {
    let title = title.to_string();
    let options = notice_options(description);
    match level {
        NoticeLevel::Info => toasts.info(title, options),
        NoticeLevel::Success => toasts.success(title, options),
        NoticeLevel::Warning => toasts.warning(title, options),
        NoticeLevel::Error => toasts.error(title, options),
    }
}

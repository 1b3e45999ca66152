//! User-facing text shared across pages.

pub const APP_TITLE: &str = "Daily Reports";

pub const LOGIN_SUCCESS: &str = "Logged in";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_FAILED_DETAIL: &str = "Check your username and password.";
pub const LOGGED_OUT: &str = "Logged out";
pub const SESSION_EXPIRED: &str = "Session expired";
pub const SESSION_EXPIRED_DETAIL: &str = "Please log in again.";

pub const LOAD_REPORTS_FAILED: &str = "Could not load reports";
pub const LOAD_REPORT_FAILED: &str = "Could not load the report";
pub const REPORT_NOT_FOUND: &str = "The report does not exist or you cannot view it.";

pub const REPORT_CREATED: &str = "Report created";
pub const REPORT_UPDATED: &str = "Report updated";
pub const SAVE_FAILED: &str = "Could not save the report";
pub const FIX_FORM_ERRORS: &str = "Please correct the highlighted fields.";

pub const REPORT_DELETED: &str = "Report deleted";
pub const DELETE_FAILED: &str = "Could not delete the report";
pub const REPORT_SUBMITTED: &str = "Report submitted";
pub const REPORT_WITHDRAWN: &str = "Report returned to draft";
pub const STATUS_CHANGE_FAILED: &str = "Could not change the status";

pub const NO_REPORTS: &str = "No reports yet.";
pub const NO_MATCHES: &str = "No reports match the current filters.";
pub const NO_TEAM_REPORTS: &str = "Your team has not written any reports yet.";
pub const TEAM_FORBIDDEN: &str = "Only supervisors and administrators can view team reports.";

/// Fallback when an error carries no text of its own.
pub const OPERATION_FAILED: &str = "The operation failed. Please try again.";

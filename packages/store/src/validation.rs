//! Field-level validation for the login and report forms.
//!
//! Errors are collected per [`Field`] so views can render each message next to
//! its input. Validation never fails hard: a form either yields its request body
//! or a [`FieldErrors`] map.

use std::collections::BTreeMap;

use crate::dates::parse_date;
use crate::models::{DailyReport, ReportDraft, ReportStatus};

pub const TITLE_MAX_CHARS: usize = 200;
pub const WORK_CONTENT_MIN_CHARS: usize = 10;
pub const WORK_CONTENT_MAX_CHARS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
    Title,
    WorkContent,
    ReportDate,
}

/// Validation messages keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check<T>(&mut self, field: Field, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }
}

pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(format!("Title must be at most {TITLE_MAX_CHARS} characters"));
    }
    Ok(())
}

pub fn validate_work_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Work content is required".to_string());
    }
    let len = content.chars().count();
    if len < WORK_CONTENT_MIN_CHARS {
        return Err(format!(
            "Work content must be at least {WORK_CONTENT_MIN_CHARS} characters"
        ));
    }
    if len > WORK_CONTENT_MAX_CHARS {
        return Err(format!(
            "Work content must be at most {WORK_CONTENT_MAX_CHARS} characters"
        ));
    }
    Ok(())
}

pub fn validate_report_date(value: &str) -> Result<chrono::NaiveDate, String> {
    if value.trim().is_empty() {
        return Err("Report date is required".to_string());
    }
    parse_date(value).ok_or_else(|| "Enter the date as YYYY-MM-DD".to_string())
}

/// Editable state of the report form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub title: String,
    pub work_content: String,
    /// `YYYY-MM-DD` as typed into the date input
    pub report_date: String,
}

impl ReportForm {
    /// Empty form dated `today`.
    pub fn for_date(today: chrono::NaiveDate) -> Self {
        Self {
            report_date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    pub fn from_report(report: &DailyReport) -> Self {
        Self {
            title: report.title.clone(),
            work_content: report.work_content.clone(),
            report_date: report.report_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Build the request body, or every field error at once.
    pub fn validate(&self, status: ReportStatus) -> Result<ReportDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(Field::Title, validate_title(&self.title));
        errors.check(Field::WorkContent, validate_work_content(&self.work_content));
        let report_date = errors.check(Field::ReportDate, validate_report_date(&self.report_date));

        match report_date {
            Some(report_date) if errors.is_empty() => Ok(ReportDraft {
                title: self.title.trim().to_string(),
                work_content: self.work_content.clone(),
                report_date,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Editable state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.insert(Field::Username, "Username is required");
        }
        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, content: &str, date: &str) -> ReportForm {
        ReportForm {
            title: title.to_string(),
            work_content: content.to_string(),
            report_date: date.to_string(),
        }
    }

    #[test]
    fn valid_form_produces_draft() {
        let draft = form("  Weekly sync  ", "Discussed the release plan.", "2024-12-20")
            .validate(ReportStatus::Submitted)
            .unwrap();
        assert_eq!(draft.title, "Weekly sync");
        assert_eq!(draft.status, ReportStatus::Submitted);
        assert_eq!(draft.report_date.to_string(), "2024-12-20");
    }

    #[test]
    fn collects_every_field_error() {
        let errors = form("", "short", "2024/12/20")
            .validate(ReportStatus::Draft)
            .unwrap_err();
        assert_eq!(errors.get(Field::Title), Some("Title is required"));
        assert!(errors.get(Field::WorkContent).unwrap().contains("at least 10"));
        assert_eq!(errors.get(Field::ReportDate), Some("Enter the date as YYYY-MM-DD"));
        let mut expected = FieldErrors::new();
        expected.insert(Field::Title, "Title is required");
        expected.insert(Field::WorkContent, errors.get(Field::WorkContent).unwrap());
        expected.insert(Field::ReportDate, "Enter the date as YYYY-MM-DD");
        assert_eq!(errors, expected);
    }

    #[test]
    fn enforces_length_limits_in_characters() {
        assert!(validate_title(&"x".repeat(TITLE_MAX_CHARS)).is_ok());
        assert!(validate_title(&"x".repeat(TITLE_MAX_CHARS + 1)).is_err());
        // Multi-byte characters count once each
        assert!(validate_work_content("日報の作業内容を記入します").is_ok());
        assert!(validate_work_content(&"a".repeat(WORK_CONTENT_MAX_CHARS + 1)).is_err());
        assert!(validate_work_content("          ").is_err());
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(validate_report_date("2024-02-30").is_err());
        assert_eq!(validate_report_date(""), Err("Report date is required".to_string()));
    }

    #[test]
    fn login_form_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.get(Field::Username).is_some());
        assert!(errors.get(Field::Password).is_some());

        let ok = LoginForm {
            username: "admin".to_string(),
            password: "password".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}

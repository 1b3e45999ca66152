//! Client-side narrowing of a report list.
//!
//! [`filter_reports`] applies four predicates in a fixed order, each skipped when
//! its input is empty:
//!
//! 1. status equality (skipped for [`StatusFilter::All`])
//! 2. case-insensitive substring on the title
//! 3. case-insensitive substring on the work content
//! 4. inclusive date range on the report date, each bound on its own
//!
//! The result keeps the source order. A date bound that does not parse excludes
//! nothing.

use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::models::{DailyReport, ReportStatus};

/// Status selector of the list views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    pub const CHOICES: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Only(ReportStatus::Draft),
        StatusFilter::Only(ReportStatus::Submitted),
    ];

    pub fn matches(&self, status: ReportStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// `all`, `draft` or `submitted`.
    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(StatusFilter::All),
            "draft" => Some(StatusFilter::Only(ReportStatus::Draft)),
            "submitted" => Some(StatusFilter::Only(ReportStatus::Submitted)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// Search form state. Empty fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`, inclusive
    pub start_date: String,
    /// `YYYY-MM-DD`, inclusive
    pub end_date: String,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.content.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

fn date_bound(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    parse_date(value)
}

/// Narrow `reports` to those matching `status` and `criteria`.
pub fn filter_reports(
    reports: &[DailyReport],
    status: StatusFilter,
    criteria: &SearchCriteria,
) -> Vec<DailyReport> {
    let title = criteria.title.to_lowercase();
    let content = criteria.content.to_lowercase();
    let start = date_bound(&criteria.start_date);
    let end = date_bound(&criteria.end_date);

    reports
        .iter()
        .filter(|report| status.matches(report.status))
        .filter(|report| contains_ignore_case(&report.title, &title))
        .filter(|report| contains_ignore_case(&report.work_content, &content))
        .filter(|report| start.map_or(true, |start| report.report_date >= start))
        .filter(|report| end.map_or(true, |end| report.report_date <= end))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: i64, title: &str, content: &str, status: ReportStatus, date: &str) -> DailyReport {
        DailyReport {
            id,
            user_id: 3,
            username: "employee1".to_string(),
            display_name: None,
            title: title.to_string(),
            work_content: content.to_string(),
            status,
            report_date: parse_date(date).unwrap(),
            submitted_at: None,
            created_at: format!("{date}T17:00:00"),
            updated_at: None,
        }
    }

    fn sample() -> Vec<DailyReport> {
        vec![
            report(1, "Component refactoring", "Memoised the list view", ReportStatus::Submitted, "2024-12-20"),
            report(2, "API integration tests", "Wrote contract tests for the REST layer", ReportStatus::Draft, "2024-12-21"),
            report(3, "Schema review meeting", "Reviewed indexes with the DB team", ReportStatus::Submitted, "2024-12-19"),
            report(4, "Test environment", "Sped up the test runner", ReportStatus::Draft, "2024-12-18"),
            report(5, "CI pipeline", "Docker layer caching for the API image", ReportStatus::Submitted, "2024-11-20"),
        ]
    }

    fn ids(reports: &[DailyReport]) -> Vec<i64> {
        reports.iter().map(|r| r.id).collect()
    }

    #[test]
    fn no_op_filters_return_input_unchanged() {
        let reports = sample();
        let filtered = filter_reports(&reports, StatusFilter::All, &SearchCriteria::default());
        assert_eq!(filtered, reports);
    }

    #[test]
    fn filtering_is_idempotent() {
        let reports = sample();
        let criteria = SearchCriteria {
            title: "test".to_string(),
            start_date: "2024-12-01".to_string(),
            ..SearchCriteria::default()
        };
        let once = filter_reports(&reports, StatusFilter::Only(ReportStatus::Draft), &criteria);
        let twice = filter_reports(&once, StatusFilter::Only(ReportStatus::Draft), &criteria);
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![2, 4]);
    }

    #[test]
    fn status_filter_narrows_by_equality() {
        let reports = sample();
        let drafts = filter_reports(&reports, StatusFilter::Only(ReportStatus::Draft), &SearchCriteria::default());
        assert_eq!(ids(&drafts), vec![2, 4]);
        let submitted = filter_reports(&reports, StatusFilter::Only(ReportStatus::Submitted), &SearchCriteria::default());
        assert_eq!(ids(&submitted), vec![1, 3, 5]);
    }

    #[test]
    fn title_and_content_match_case_insensitively() {
        let reports = sample();
        let criteria = SearchCriteria {
            title: "API".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &criteria)), vec![2]);

        let criteria = SearchCriteria {
            content: "docker".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &criteria)), vec![5]);

        // Title and content are independent: "api" in content only
        let criteria = SearchCriteria {
            title: "ci".to_string(),
            content: "api".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &criteria)), vec![5]);
    }

    #[test]
    fn date_range_is_inclusive_and_bounds_are_independent() {
        let reports = sample();
        let criteria = SearchCriteria {
            start_date: "2024-12-19".to_string(),
            end_date: "2024-12-20".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &criteria)), vec![1, 3]);

        let only_start = SearchCriteria {
            start_date: "2024-12-20".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &only_start)), vec![1, 2]);

        let only_end = SearchCriteria {
            end_date: "2024-12-18".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_reports(&reports, StatusFilter::All, &only_end)), vec![4, 5]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let reports = sample();
        let criteria = SearchCriteria {
            title: "e".to_string(),
            content: "the".to_string(),
            start_date: "2024-12-01".to_string(),
            end_date: "2024-12-31".to_string(),
        };
        let filtered = filter_reports(&reports, StatusFilter::Only(ReportStatus::Submitted), &criteria);
        assert_eq!(ids(&filtered), vec![1, 3]);

        let criteria = SearchCriteria {
            title: "review".to_string(),
            ..criteria
        };
        let filtered = filter_reports(&reports, StatusFilter::Only(ReportStatus::Submitted), &criteria);
        assert_eq!(ids(&filtered), vec![3]);
    }

    #[test]
    fn unparseable_bound_excludes_nothing() {
        let reports = sample();
        let criteria = SearchCriteria {
            start_date: "12/01/2024".to_string(),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_reports(&reports, StatusFilter::All, &criteria), reports);
    }

    #[test]
    fn status_filter_keys_round_trip() {
        for filter in StatusFilter::CHOICES {
            assert_eq!(StatusFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(StatusFilter::from_key("archived"), None);
    }
}

//! Date parsing and display helpers.
//!
//! Report dates are calendar dates (`YYYY-MM-DD`). Timestamps from the backend
//! are ISO-8601 strings that may or may not carry an offset
//! (`2024-12-20T18:30:00.000Z` from the mock, `2024-12-20T18:30:00` from the
//! REST backend), so they stay strings on the model and are only parsed for
//! display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `2024/12/20`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// `2024-12`, as used by the list endpoint's `yearMonth` parameter.
pub fn year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// `2024/12/20 18:30`, or the input unchanged when it cannot be parsed.
pub fn format_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%Y/%m/%d %H:%M").to_string(),
        None => {
            tracing::warn!("Unparseable timestamp: {}", value);
            value.to_string()
        }
    }
}

pub fn format_optional_timestamp(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(format_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_strict_dates() {
        assert_eq!(parse_date("2024-12-20"), NaiveDate::from_ymd_opt(2024, 12, 20));
        assert_eq!(parse_date(" 2024-12-20 "), NaiveDate::from_ymd_opt(2024, 12, 20));
        assert_eq!(parse_date("2024-2-3"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("20241220"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn formats_both_timestamp_flavours() {
        assert_eq!(format_timestamp("2024-12-20T18:30:00.000Z"), "2024/12/20 18:30");
        assert_eq!(format_timestamp("2024-12-20T18:30:00"), "2024/12/20 18:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_optional_timestamp(None), None);
        assert_eq!(format_optional_timestamp(Some("")), None);
    }

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "2024/03/05");
        assert_eq!(year_month(date), "2024-03");
    }
}

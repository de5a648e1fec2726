// healthdq-core/src/domain/parsing.rs
//
// Numeric and date coercions shared by the conformance checker and the rule checker.
// None of these functions fail: an unparseable cell simply yields `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::table::CellValue;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

// Month-first before day-first, matching the default locale convention.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%Y%m%d",
];

/// Numeric view of a cell. Text is trimmed before parsing; dates are not numbers.
pub fn as_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Integer(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        CellValue::Date(_) | CellValue::Missing => None,
    }
}

/// Integer view of a cell: any finite number, truncated toward zero.
pub fn as_int_like(cell: &CellValue) -> Option<i64> {
    if let CellValue::Integer(i) = cell {
        return Some(*i);
    }
    as_number(cell)
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
}

pub fn as_datetime(cell: &CellValue) -> Option<NaiveDateTime> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_datetime(s),
        _ => None,
    }
}

/// Permissive date parsing: RFC 3339, common date-time layouts, then date-only layouts.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Strict ISO-8601 parsing used by the loader when inferring date columns.
pub fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_numeric_text_is_trimmed() {
        assert_eq!(as_number(&CellValue::text(" 30 ")), Some(30.0));
        assert_eq!(as_number(&CellValue::text("30.0")), Some(30.0));
        assert_eq!(as_number(&CellValue::text("thirty")), None);
        assert_eq!(as_number(&CellValue::Missing), None);
    }

    #[test]
    fn test_int_like_truncates() {
        assert_eq!(as_int_like(&CellValue::Float(120.7)), Some(120));
        assert_eq!(as_int_like(&CellValue::Float(-0.5)), Some(0));
        assert_eq!(as_int_like(&CellValue::text("45")), Some(45));
        assert_eq!(as_int_like(&CellValue::text("inf")), None);
        assert_eq!(as_int_like(&CellValue::text("nan")), None);
    }

    #[test]
    fn test_parse_datetime_layouts() {
        assert_eq!(parse_datetime("2023-01-15"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("01/15/2023"), Some(ymd(2023, 1, 15)));
        // Day-first is only used when month-first cannot apply.
        assert_eq!(parse_datetime("15/01/2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("15 Jan 2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("January 15, 2023"), Some(ymd(2023, 1, 15)));
        assert!(parse_datetime("2023-01-15 08:30:00").is_some());
        assert!(parse_datetime("2023-01-15T08:30:00Z").is_some());
    }

    #[test]
    fn test_parse_datetime_dashed_day_first_and_compact() {
        assert_eq!(parse_datetime("15-01-2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("01-15-2023"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("20230115"), Some(ymd(2023, 1, 15)));
        assert_eq!(parse_datetime("20231345"), None);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime("2023-13-45"), None);
    }

    #[test]
    fn test_iso_parsing_is_strict() {
        assert_eq!(parse_iso_datetime("2023-02-03"), Some(ymd(2023, 2, 3)));
        assert_eq!(parse_iso_datetime("02/03/2023"), None);
    }

    #[test]
    fn test_numbers_are_not_dates() {
        assert_eq!(as_datetime(&CellValue::Integer(20230115)), None);
        assert_eq!(as_datetime(&CellValue::Missing), None);
    }
}

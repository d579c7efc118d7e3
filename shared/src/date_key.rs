//! Canonical `YYYY-MM-DD` date keys.
//!
//! Grid cells, holiday lookups and the backend all go through these functions,
//! so a key built for a cell always matches the key a holiday was stored under.
//! Months are 0-based on input (`0` = January) to match the calendar's
//! navigation state; the rendered key is 1-based.

use chrono::{Datelike, NaiveDate};

/// Format a (year, 0-based month, 1-based day) triple as `YYYY-MM-DD`.
///
/// Operates purely on the supplied integers; no timezone or locale is involved.
pub fn format_date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}

/// Format a chrono date as a date key
pub fn date_key_for(date: NaiveDate) -> String {
    format_date_key(date.year(), date.month0(), date.day())
}

/// Parse a date key, accepting only the exact `YYYY-MM-DD` shape of a real date
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let bytes = key.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let all_digits = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !all_digits {
        return None;
    }

    let year = key[0..4].parse::<i32>().ok()?;
    let month = key[5..7].parse::<u32>().ok()?;
    let day = key[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_zero_pads_month_and_day() {
        assert_eq!(format_date_key(2025, 0, 5), "2025-01-05");
        assert_eq!(format_date_key(2025, 11, 25), "2025-12-25");
        assert_eq!(format_date_key(987, 8, 9), "0987-09-09");
    }

    #[test]
    fn test_format_is_injective_over_a_year() {
        let mut keys = HashSet::new();
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while date.year() == 2024 {
            assert!(keys.insert(date_key_for(date)), "duplicate key for {}", date);
            date = date.succ_opt().unwrap();
        }
        assert_eq!(keys.len(), 366);
    }

    #[test]
    fn test_parse_accepts_formatted_keys() {
        let key = format_date_key(2024, 1, 29);
        assert_eq!(parse_date_key(&key), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert_eq!(parse_date_key("2025-1-05"), None);
        assert_eq!(parse_date_key("2025/01/05"), None);
        assert_eq!(parse_date_key("2025-02-30"), None);
        assert_eq!(parse_date_key("2023-02-29"), None);
        assert_eq!(parse_date_key("2025-13-01"), None);
        assert_eq!(parse_date_key("christmas"), None);
        assert_eq!(parse_date_key(""), None);
    }
}

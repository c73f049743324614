//! Recency computation against an explicit reference date.

use chrono::NaiveDate;

/// Parse an ISO-8601-like date string. A trailing time component
/// (`2021-03-09T14:00:00` or `2021-03-09 14:00:00`) is tolerated by taking
/// the date part. Returns `None` for anything unparsable.
pub fn parse_activity_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed
        .split_once(['T', ' '])
        .map(|(date, _)| date)
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Whole days between the reference date and the last activity date
/// (reference minus activity). `None` when the activity date is missing or
/// unparsable; absence feeds into classification, it is never an error.
pub fn days_inactive(last_activity: Option<&str>, reference_date: NaiveDate) -> Option<i64> {
    let activity = parse_activity_date(last_activity?)?;
    Some(reference_date.signed_duration_since(activity).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date_parses() {
        assert_eq!(parse_activity_date("2021-03-09"), Some(date(2021, 3, 9)));
    }

    #[test]
    fn test_timestamp_suffix_tolerated() {
        assert_eq!(
            parse_activity_date("2021-03-09T14:30:00"),
            Some(date(2021, 3, 9))
        );
        assert_eq!(
            parse_activity_date("2021-03-09 14:30:00"),
            Some(date(2021, 3, 9))
        );
    }

    #[test]
    fn test_garbage_and_empty_are_none() {
        assert_eq!(parse_activity_date(""), None);
        assert_eq!(parse_activity_date("   "), None);
        assert_eq!(parse_activity_date("not-a-date"), None);
        assert_eq!(parse_activity_date("2021-13-40"), None);
    }

    #[test]
    fn test_days_inactive_exact() {
        let reference = date(2026, 1, 15);
        assert_eq!(days_inactive(Some("2021-03-09"), reference), Some(1773));
        assert_eq!(days_inactive(Some("2025-10-09"), reference), Some(98));
        assert_eq!(days_inactive(Some("2026-01-15"), reference), Some(0));
    }

    #[test]
    fn test_days_inactive_absent_for_missing_or_bad_input() {
        let reference = date(2026, 1, 15);
        assert_eq!(days_inactive(None, reference), None);
        assert_eq!(days_inactive(Some(""), reference), None);
        assert_eq!(days_inactive(Some("03/09/2021"), reference), None);
    }
}

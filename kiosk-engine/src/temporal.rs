//! Temporal Range Evaluator
//!
//! Parses the feed's heterogeneous date strings and decides membership
//! in a start/end window. The feed treats an unparseable or missing
//! date as "no constraint", and the whole promotion/menu pipeline is
//! fail-open by policy; [`RangePolicy`] makes that failure mode an
//! explicit, testable choice instead of a catch-all.

use chrono::{DateTime, NaiveDate};
use shared::util::BUSINESS_TZ;

/// Verdict when the evaluator itself cannot produce an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Treat evaluation failure as "in range" (availability over strictness)
    #[default]
    FailOpen,
    /// Treat evaluation failure as "out of range"
    FailClosed,
}

impl RangePolicy {
    fn verdict(&self) -> bool {
        matches!(self, Self::FailOpen)
    }
}

/// Parse a feed date cell
///
/// Accepts `DD/MM/YYYY` (the sheet's explicit format) or an ISO-8601
/// date / datetime prefix. Returns `None` for blank or unparseable
/// input; callers treat `None` as "no constraint on this side", never
/// as an error.
pub fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d/%m/%Y") {
        return Some(date);
    }
    // ISO date, with any time component discarded
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    None
}

/// Whether "today" (UTC+7, date-only) falls inside `[start, end]`
///
/// Both bounds absent means a permanent item - always true. An absent
/// or unparseable bound leaves that side unconstrained.
pub fn is_date_in_range(start: &str, end: &str, at_millis: i64, policy: RangePolicy) -> bool {
    let start_date = parse_feed_date(start);
    let end_date = parse_feed_date(end);

    if start_date.is_none() && end_date.is_none() {
        return true;
    }

    let Some(today) = DateTime::from_timestamp_millis(at_millis)
        .map(|dt| dt.with_timezone(&BUSINESS_TZ).date_naive())
    else {
        return policy.verdict();
    };

    if let Some(start) = start_date
        && today < start
    {
        return false;
    }
    if let Some(end) = end_date
        && today > end
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-15 05:00:00 UTC = 2024-06-15 12:00 UTC+7
    const MIDDAY_UTC7: i64 = 1_718_427_600_000;

    #[test]
    fn parses_slash_format_first() {
        assert_eq!(
            parse_feed_date("15/06/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn parses_iso_date_and_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15);
        assert_eq!(parse_feed_date("2024-06-15"), expected);
        assert_eq!(parse_feed_date("2024-06-15T09:30:00Z"), expected);
        assert_eq!(parse_feed_date("2024-06-15 09:30:00"), expected);
    }

    #[test]
    fn blank_and_garbage_parse_to_none() {
        assert_eq!(parse_feed_date(""), None);
        assert_eq!(parse_feed_date("   "), None);
        assert_eq!(parse_feed_date("next tuesday"), None);
        assert_eq!(parse_feed_date("99/99/2024"), None);
    }

    #[test]
    fn no_bounds_is_permanent() {
        assert!(is_date_in_range("", "", MIDDAY_UTC7, RangePolicy::FailOpen));
        assert!(is_date_in_range("", "", MIDDAY_UTC7, RangePolicy::FailClosed));
    }

    #[test]
    fn bounded_window_membership() {
        assert!(is_date_in_range(
            "01/06/2024",
            "30/06/2024",
            MIDDAY_UTC7,
            RangePolicy::FailOpen
        ));
        assert!(!is_date_in_range(
            "16/06/2024",
            "",
            MIDDAY_UTC7,
            RangePolicy::FailOpen
        ));
        assert!(!is_date_in_range(
            "",
            "14/06/2024",
            MIDDAY_UTC7,
            RangePolicy::FailOpen
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        // Business date at this instant is 2024-06-15
        assert!(is_date_in_range(
            "15/06/2024",
            "15/06/2024",
            MIDDAY_UTC7,
            RangePolicy::FailOpen
        ));
    }

    #[test]
    fn business_timezone_shifts_today() {
        // 2024-06-15 18:30 UTC is already 2024-06-16 in UTC+7
        let late_utc = 1_718_476_200_000;
        assert!(!is_date_in_range(
            "",
            "15/06/2024",
            late_utc,
            RangePolicy::FailOpen
        ));
    }

    #[test]
    fn unparseable_bound_is_unconstrained() {
        // A garbage end date must not hide the item
        assert!(is_date_in_range(
            "01/06/2024",
            "not a date",
            MIDDAY_UTC7,
            RangePolicy::FailOpen
        ));
    }

    #[test]
    fn policy_decides_internal_failure() {
        // Out-of-range timestamps cannot be converted to a date
        assert!(is_date_in_range(
            "01/06/2024",
            "",
            i64::MAX,
            RangePolicy::FailOpen
        ));
        assert!(!is_date_in_range(
            "01/06/2024",
            "",
            i64::MAX,
            RangePolicy::FailClosed
        ));
    }
}

//! Business-time utilities
//!
//! The chain operates on UTC+7 (Asia/Bangkok) regardless of device
//! timezone. All "today"/"weekday" decisions go through these helpers.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

/// Business timezone for all stores (UTC+7)
pub const BUSINESS_TZ: Tz = chrono_tz::Asia::Bangkok;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Unix millis → business-timezone datetime
///
/// Out-of-range instants clamp to the Unix epoch so downstream date
/// and weekday checks stay deterministic.
pub fn business_time(at_millis: i64) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(at_millis)
        .unwrap_or_default()
        .with_timezone(&BUSINESS_TZ)
}

/// Business-timezone date for a Unix millis instant
pub fn business_date(at_millis: i64) -> NaiveDate {
    business_time(at_millis).date_naive()
}

/// UTC date key (YYYY-MM-DD) used for daily quota counters
///
/// Out-of-range instants clamp to the Unix epoch; identical inputs
/// always produce identical quota keys.
pub fn utc_date_key(at_millis: i64) -> String {
    DateTime::from_timestamp_millis(at_millis)
        .unwrap_or_default()
        .format("%Y-%m-%d")
        .to_string()
}

/// Business-timezone weekday abbreviation ("Mon".."Sun")
pub fn business_weekday(at_millis: i64) -> &'static str {
    use chrono::Datelike;
    match business_time(at_millis).weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-15 20:30:00 UTC = 2024-06-16 03:30 UTC+7 (Sunday)
    const SAT_EVENING_UTC: i64 = 1_718_483_400_000;

    #[test]
    fn business_date_shifts_across_midnight() {
        let date = business_date(SAT_EVENING_UTC);
        assert_eq!(date.to_string(), "2024-06-16");
        // The UTC quota key stays on the UTC day
        assert_eq!(utc_date_key(SAT_EVENING_UTC), "2024-06-15");
    }

    #[test]
    fn weekday_follows_business_timezone() {
        assert_eq!(business_weekday(SAT_EVENING_UTC), "Sun");
    }

    #[test]
    fn out_of_range_instant_clamps_to_epoch() {
        assert_eq!(utc_date_key(i64::MAX), "1970-01-01");
        assert_eq!(business_date(i64::MAX).to_string(), "1970-01-01");
        assert_eq!(business_weekday(i64::MAX), "Thu");
    }
}

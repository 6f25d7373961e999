//! Promotion Resolver
//!
//! Decides whether a product's discounted price is currently active.
//! Three conditions, short-circuit AND: promo price present, promo
//! window contains today, and the current weekday (UTC+7) is allowed.

use shared::models::ProductRecord;
use shared::util::business_weekday;

use crate::temporal::{RangePolicy, is_date_in_range};

/// Whether the record's promotion applies at the given instant
pub fn is_promotion_active(product: &ProductRecord, at_millis: i64) -> bool {
    if product.promo_price.is_none() {
        return false;
    }

    if !is_date_in_range(
        &product.promo_start,
        &product.promo_end,
        at_millis,
        RangePolicy::FailOpen,
    ) {
        return false;
    }

    // Empty day list means no weekday restriction
    if !product.promo_days.is_empty() {
        let today = business_weekday(at_millis);
        let allowed = product
            .promo_days
            .split(',')
            .map(str::trim)
            .any(|day| day.eq_ignore_ascii_case(today));
        if !allowed {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RawProductRow;

    // 2024-06-15 05:00:00 UTC = Saturday 2024-06-15 12:00 UTC+7
    const SATURDAY_MIDDAY: i64 = 1_718_427_600_000;

    fn make_product(promo_price: &str, start: &str, end: &str, days: &str) -> ProductRecord {
        let mut raw = RawProductRow::default();
        raw.name_th = "ชาไทย".to_string();
        raw.price = "45".to_string();
        raw.promo_price = promo_price.to_string();
        raw.promo_start = start.to_string();
        raw.promo_end = end.to_string();
        raw.promo_days = days.to_string();
        ProductRecord::from_raw(raw)
    }

    #[test]
    fn blank_promo_price_is_never_active() {
        let product = make_product("", "01/06/2024", "30/06/2024", "");
        assert!(!is_promotion_active(&product, SATURDAY_MIDDAY));

        let product = make_product("   ", "", "", "");
        assert!(!is_promotion_active(&product, SATURDAY_MIDDAY));
    }

    #[test]
    fn active_inside_window() {
        let product = make_product("39", "01/06/2024", "30/06/2024", "");
        assert!(is_promotion_active(&product, SATURDAY_MIDDAY));
    }

    #[test]
    fn inactive_outside_window() {
        let product = make_product("39", "16/06/2024", "30/06/2024", "");
        assert!(!is_promotion_active(&product, SATURDAY_MIDDAY));
    }

    #[test]
    fn no_dates_means_always_on_while_priced() {
        let product = make_product("39", "", "", "");
        assert!(is_promotion_active(&product, SATURDAY_MIDDAY));
    }

    #[test]
    fn weekday_restriction_is_case_insensitive() {
        let product = make_product("39", "", "", "sat, sun");
        assert!(is_promotion_active(&product, SATURDAY_MIDDAY));

        let product = make_product("39", "", "", "Mon,Tue,Wed");
        assert!(!is_promotion_active(&product, SATURDAY_MIDDAY));
    }

    #[test]
    fn weekday_follows_business_timezone() {
        // 2024-06-15 18:30 UTC is already Sunday in UTC+7
        let late_utc = 1_718_476_200_000;
        let product = make_product("39", "", "", "Sun");
        assert!(is_promotion_active(&product, late_utc));
    }
}

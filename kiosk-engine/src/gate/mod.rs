//! Rate/Quota Gate
//!
//! Gates outbound analytics events behind two sliding rate windows and
//! a per-city daily quota. A rejection is a structured decision the
//! caller turns into user feedback, never an error.

mod store;

use std::sync::Arc;

use shared::util::{now_millis, utc_date_key};

pub use store::{CounterStore, MemoryCounterStore};

/// Sliding windows: (window seconds, request cap)
///
/// Burst first; the first failing window aborts the check, so a burst
/// rejection leaves the sustained window's list untouched.
pub const RATE_WINDOWS: [(i64, u32); 2] = [(30, 3), (600, 10)];

/// Default per-city daily event cap
pub const DEFAULT_DAILY_QUOTA: u32 = 30;

/// Why a gate check rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateReason {
    RateLimited,
    DailyQuotaExceeded,
}

impl GateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RateLimited => "rateLimited",
            Self::DailyQuotaExceeded => "dailyQuotaExceeded",
        }
    }
}

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub ok: bool,
    pub reason: Option<GateReason>,
}

impl GateDecision {
    fn allow() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    fn deny(reason: GateReason) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }
}

/// Analytics gate over an injected counter store
#[derive(Clone)]
pub struct RateQuotaGate {
    store: Arc<dyn CounterStore>,
}

impl RateQuotaGate {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Check both sliding windows for `(session, action)` at "now"
    pub fn check_rate_limit(&self, session_id: &str, action: &str) -> GateDecision {
        self.check_rate_limit_at(session_id, action, now_millis())
    }

    /// Clock-injected variant of [`check_rate_limit`](Self::check_rate_limit)
    pub fn check_rate_limit_at(
        &self,
        session_id: &str,
        action: &str,
        at_millis: i64,
    ) -> GateDecision {
        for (window_secs, cap) in RATE_WINDOWS {
            let key = format!("rate:{}:{}:{}", action, session_id, window_secs);
            let cutoff = at_millis - window_secs * 1000;

            let mut stamps = self.store.get_timestamps(&key);
            stamps.retain(|t| *t > cutoff);

            if stamps.len() as u32 >= cap {
                tracing::debug!(
                    session_id,
                    action,
                    window_secs,
                    cap,
                    "Rate limit rejected"
                );
                return GateDecision::deny(GateReason::RateLimited);
            }

            stamps.push(at_millis);
            self.store.put_timestamps(&key, stamps);
        }
        GateDecision::allow()
    }

    /// Check the per-city daily quota for `(session, action)` at "now"
    pub fn check_daily_quota(
        &self,
        session_id: &str,
        city: &str,
        action: &str,
        cap: u32,
    ) -> GateDecision {
        self.check_daily_quota_at(session_id, city, action, cap, now_millis())
    }

    /// Clock-injected variant of [`check_daily_quota`](Self::check_daily_quota)
    pub fn check_daily_quota_at(
        &self,
        session_id: &str,
        city: &str,
        action: &str,
        cap: u32,
        at_millis: i64,
    ) -> GateDecision {
        let key = format!(
            "quota:{}:{}:{}:{}",
            action,
            session_id,
            city,
            utc_date_key(at_millis)
        );

        let count = self.store.get_count(&key);
        if count >= cap {
            tracing::debug!(session_id, city, action, cap, "Daily quota rejected");
            return GateDecision::deny(GateReason::DailyQuotaExceeded);
        }

        self.store.put_count(&key, count + 1);
        GateDecision::allow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_718_427_600_000;

    fn make_gate() -> (RateQuotaGate, Arc<MemoryCounterStore>) {
        let store = Arc::new(MemoryCounterStore::new());
        (RateQuotaGate::new(store.clone()), store)
    }

    #[test]
    fn burst_window_allows_three_then_rejects() {
        let (gate, _) = make_gate();

        for i in 0..3 {
            let decision = gate.check_rate_limit_at("s1", "order", T0 + i * 1000);
            assert!(decision.ok, "call {} should pass", i + 1);
        }
        let fourth = gate.check_rate_limit_at("s1", "order", T0 + 3000);
        assert!(!fourth.ok);
        assert_eq!(fourth.reason, Some(GateReason::RateLimited));
        assert_eq!(fourth.reason.unwrap().as_str(), "rateLimited");
    }

    #[test]
    fn burst_window_slides() {
        let (gate, _) = make_gate();

        for i in 0..3 {
            assert!(gate.check_rate_limit_at("s1", "order", T0 + i * 1000).ok);
        }
        assert!(!gate.check_rate_limit_at("s1", "order", T0 + 3000).ok);
        // 31s after the first call, the oldest stamp has left the window
        assert!(gate.check_rate_limit_at("s1", "order", T0 + 31_000).ok);
    }

    #[test]
    fn sustained_window_rejects_after_ten() {
        let (gate, _) = make_gate();

        // Spaced outside the burst window, inside the sustained one
        for i in 0..10 {
            let decision = gate.check_rate_limit_at("s1", "order", T0 + i * 35_000);
            assert!(decision.ok, "call {} should pass", i + 1);
        }
        let eleventh = gate.check_rate_limit_at("s1", "order", T0 + 10 * 35_000);
        assert!(!eleventh.ok);
        assert_eq!(eleventh.reason, Some(GateReason::RateLimited));
    }

    #[test]
    fn sessions_and_actions_are_isolated() {
        let (gate, _) = make_gate();

        for i in 0..3 {
            assert!(gate.check_rate_limit_at("s1", "order", T0 + i * 1000).ok);
        }
        assert!(!gate.check_rate_limit_at("s1", "order", T0 + 3000).ok);
        // Different session or action starts fresh
        assert!(gate.check_rate_limit_at("s2", "order", T0 + 3000).ok);
        assert!(gate.check_rate_limit_at("s1", "feedback", T0 + 3000).ok);
    }

    #[test]
    fn burst_rejection_leaves_sustained_window_untouched() {
        let (gate, store) = make_gate();

        for i in 0..3 {
            assert!(gate.check_rate_limit_at("s1", "order", T0 + i * 1000).ok);
        }
        assert!(!gate.check_rate_limit_at("s1", "order", T0 + 3000).ok);

        // Preserved source asymmetry: the rejected call was never added
        // to the sustained window's list
        let sustained = store.get_timestamps("rate:order:s1:600");
        assert_eq!(sustained.len(), 3);
    }

    #[test]
    fn daily_quota_allows_cap_then_rejects() {
        let (gate, _) = make_gate();

        for i in 0..DEFAULT_DAILY_QUOTA {
            let decision =
                gate.check_daily_quota_at("s1", "Bangkok", "order", DEFAULT_DAILY_QUOTA, T0);
            assert!(decision.ok, "call {} should pass", i + 1);
        }
        let over = gate.check_daily_quota_at("s1", "Bangkok", "order", DEFAULT_DAILY_QUOTA, T0);
        assert!(!over.ok);
        assert_eq!(over.reason, Some(GateReason::DailyQuotaExceeded));
        assert_eq!(over.reason.unwrap().as_str(), "dailyQuotaExceeded");
    }

    #[test]
    fn quota_counter_stops_at_cap() {
        let (gate, store) = make_gate();

        for _ in 0..35 {
            gate.check_daily_quota_at("s1", "Bangkok", "order", 30, T0);
        }
        // Rejections do not keep incrementing the counter
        assert_eq!(store.get_count("quota:order:s1:Bangkok:2024-06-15"), 30);
    }

    #[test]
    fn quota_is_per_city_and_per_day() {
        let (gate, _) = make_gate();

        for _ in 0..3 {
            assert!(gate.check_daily_quota_at("s1", "Bangkok", "order", 3, T0).ok);
        }
        assert!(!gate.check_daily_quota_at("s1", "Bangkok", "order", 3, T0).ok);
        // Another city has its own counter
        assert!(gate.check_daily_quota_at("s1", "Chiang Mai", "order", 3, T0).ok);
        // The next UTC day resets the key
        let next_day = T0 + 24 * 3600 * 1000;
        assert!(gate.check_daily_quota_at("s1", "Bangkok", "order", 3, next_day).ok);
    }
}

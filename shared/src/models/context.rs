//! Ambient Context Model
//!
//! Environmental/temporal signal produced once per session by external
//! collaborators (weather lookup, device clock) and passed in verbatim.

use serde::{Deserialize, Serialize};

use crate::types::DrinkType;
use crate::util::business_time;

/// Six fixed time-of-day buckets driving recommendation scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimeBucket {
    EarlyMorning,
    Morning,
    Midday,
    Afternoon,
    Evening,
    LateNight,
}

impl TimeBucket {
    /// Bucket for a local (UTC+7) hour
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => Self::EarlyMorning,
            8..=10 => Self::Morning,
            11..=13 => Self::Midday,
            14..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::LateNight,
        }
    }

    pub fn is_morning(&self) -> bool {
        matches!(self, Self::EarlyMorning | Self::Morning)
    }

    pub fn is_evening_or_night(&self) -> bool {
        matches!(self, Self::Evening | Self::LateNight)
    }
}

/// Ambient signal for one kiosk session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmniContext {
    /// Weather label from the location collaborator, if known
    pub weather: Option<String>,
    /// Temperature in Celsius, if known
    pub temperature: Option<f64>,
    pub bucket: TimeBucket,
}

impl OmniContext {
    pub fn new(bucket: TimeBucket) -> Self {
        Self {
            weather: None,
            temperature: None,
            bucket,
        }
    }

    /// Derive the bucket from the business-timezone hour of an instant
    pub fn at_millis(at_millis: i64) -> Self {
        use chrono::Timelike;
        Self::new(TimeBucket::from_hour(business_time(at_millis).hour()))
    }

    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    pub fn with_weather(mut self, label: impl Into<String>) -> Self {
        self.weather = Some(label.into());
        self
    }
}

/// Pure output of the recommendation scorer
///
/// Each axis is `None` both when nothing fits and when the group offers
/// no real choice on that axis - callers must not render a
/// single-option axis as "recommended".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub drink_type: Option<DrinkType>,
    pub size: Option<String>,
    pub sweetness: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_to_bucket_boundaries() {
        assert_eq!(TimeBucket::from_hour(5), TimeBucket::EarlyMorning);
        assert_eq!(TimeBucket::from_hour(8), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(11), TimeBucket::Midday);
        assert_eq!(TimeBucket::from_hour(14), TimeBucket::Afternoon);
        assert_eq!(TimeBucket::from_hour(17), TimeBucket::Evening);
        assert_eq!(TimeBucket::from_hour(21), TimeBucket::LateNight);
        assert_eq!(TimeBucket::from_hour(2), TimeBucket::LateNight);
    }

    #[test]
    fn bucket_groupings() {
        assert!(TimeBucket::EarlyMorning.is_morning());
        assert!(TimeBucket::Morning.is_morning());
        assert!(!TimeBucket::Midday.is_morning());
        assert!(TimeBucket::Evening.is_evening_or_night());
        assert!(TimeBucket::LateNight.is_evening_or_night());
        assert!(!TimeBucket::Afternoon.is_evening_or_night());
    }
}

//! Analytics Event
//!
//! Form-encoded event metadata for the analytics endpoint. Optional
//! fields are simply omitted from the form when absent.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::types::Language;
use shared::util::{business_time, now_millis};

/// One outbound analytics event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event_id: String,
    /// Event kind ("pageView", "addToCart", "orderConfirmed", "feedback", ...)
    pub action: String,
    /// Business-timezone timestamp (UTC+7)
    pub timestamp: String,
    pub session_id: String,
    pub language: Language,
    pub store_zone: Option<String>,
    pub store_number: Option<String>,
    /// Approximate location label ("Bangkok", lat/long string, ...)
    pub location: Option<String>,
    pub temperature: Option<f64>,
    pub weather: Option<String>,
    /// Selected product code, if the event concerns one
    pub product_code: Option<String>,
    /// Cart details as a JSON blob, if relevant
    pub cart: Option<String>,
    /// Timing breakdown in millis for confirmed orders
    pub order_timing_ms: Option<i64>,
    /// Free-text feedback payload, if relevant
    pub feedback: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(action: impl Into<String>, session_id: impl Into<String>, language: Language) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            action: action.into(),
            timestamp: business_time(now_millis()).to_rfc3339(),
            session_id: session_id.into(),
            language,
            store_zone: None,
            store_number: None,
            location: None,
            temperature: None,
            weather: None,
            product_code: None,
            cart: None,
            order_timing_ms: None,
            feedback: None,
        }
    }

    /// Flatten into form fields, skipping absent optionals
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("eventId".to_string(), self.event_id.clone()),
            ("action".to_string(), self.action.clone()),
            ("timestamp".to_string(), self.timestamp.clone()),
            ("sessionId".to_string(), self.session_id.clone()),
            (
                "language".to_string(),
                serde_json::to_string(&self.language)
                    .unwrap_or_default()
                    .trim_matches('"')
                    .to_string(),
            ),
        ];

        let optionals: [(&str, Option<String>); 9] = [
            ("storeZone", self.store_zone.clone()),
            ("storeNumber", self.store_number.clone()),
            ("location", self.location.clone()),
            ("temperature", self.temperature.map(|t| t.to_string())),
            ("weather", self.weather.clone()),
            ("productCode", self.product_code.clone()),
            ("cart", self.cart.clone()),
            ("orderTimingMs", self.order_timing_ms.map(|t| t.to_string())),
            ("feedback", self.feedback.clone()),
        ];
        for (key, value) in optionals {
            if let Some(value) = value {
                form.push((key.to_string(), value));
            }
        }
        form
    }
}

//! Analytics Emitter
//!
//! Fire-and-forget transport: one POST per accepted event, spawned off
//! the caller's path. Failures are logged and swallowed - analytics
//! must never affect kiosk control flow.

use super::event::AnalyticsEvent;

/// Best-effort analytics transport
#[derive(Debug, Clone)]
pub struct AnalyticsEmitter {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyticsEmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Emit an event without blocking or surfacing failures
    ///
    /// Outside an async runtime the event is logged and dropped
    /// instead of panicking.
    pub fn emit(&self, event: AnalyticsEvent) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(action = %event.action, "No async runtime, analytics event dropped");
            return;
        };

        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        handle.spawn(async move {
            let action = event.action.clone();
            let result = http.post(&endpoint).form(&event.to_form()).send().await;
            match result {
                Ok(response) if !response.status().is_success() => {
                    tracing::warn!(
                        action,
                        status = %response.status(),
                        "Analytics endpoint rejected event"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(action, error = %e, "Analytics emission failed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::Language;

    #[test]
    fn emit_without_runtime_drops_the_event() {
        let emitter = AnalyticsEmitter::new("http://127.0.0.1:1/events");
        // No runtime in a plain test thread; must not panic
        emitter.emit(AnalyticsEvent::new("pageView", "s1", Language::Th));
    }
}

//! Catalog Fetch
//!
//! GET against the sheet-backed catalog endpoint with bounded
//! retry-with-fixed-delay. Transport failures are retried; a malformed
//! payload (non-JSON, non-array) is fatal immediately.

use shared::error::{AppError, AppResult};
use shared::models::{ProductRecord, RawProductRow};

/// Default maximum fetch attempts before surfacing a fatal error
pub const MAX_FETCH_ATTEMPTS: u32 = 3;
/// Default flat delay between attempts
pub const RETRY_DELAY_MS: u64 = 2000;

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
    max_attempts: u32,
    retry_delay_ms: u64,
}

impl CatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            max_attempts: MAX_FETCH_ATTEMPTS,
            retry_delay_ms: RETRY_DELAY_MS,
        }
    }

    /// Client wired to the configured endpoint and retry settings
    pub fn from_config(config: &crate::core::Config) -> Self {
        Self::new(&config.catalog_url)
            .with_retry(config.fetch_max_attempts, config.fetch_retry_delay_ms)
    }

    /// Override the retry settings
    pub fn with_retry(mut self, max_attempts: u32, retry_delay_ms: u64) -> Self {
        self.max_attempts = max_attempts;
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Fetch and coerce the full catalog feed
    ///
    /// `store` is passed through as a query parameter when the caller
    /// knows its store number. Retries transient transport failures up
    /// to the configured attempt cap with a flat delay; payload-shape
    /// errors abort without retry.
    pub async fn fetch(&self, store: Option<&str>) -> AppResult<Vec<ProductRecord>> {
        let mut last_error = String::new();

        for attempt in 0..self.max_attempts {
            match self.fetch_once(store).await {
                Ok(records) => return Ok(records),
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => {
                    last_error = e.to_string();
                    if attempt + 1 < self.max_attempts {
                        tracing::warn!(
                            attempt = attempt + 1,
                            max = self.max_attempts,
                            error = %last_error,
                            "Catalog fetch failed, retrying"
                        );
                        tokio::time::sleep(std::time::Duration::from_millis(
                            self.retry_delay_ms,
                        ))
                        .await;
                    }
                }
            }
        }

        Err(AppError::fetch_failed(format!(
            "exhausted {} attempts: {}",
            self.max_attempts, last_error
        )))
    }

    async fn fetch_once(&self, store: Option<&str>) -> AppResult<Vec<ProductRecord>> {
        let mut request = self.http.get(&self.endpoint);
        if let Some(store) = store {
            request = request.query(&[("store", store)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx is treated like a transport failure and retried
            return Err(AppError::fetch_failed(format!(
                "catalog endpoint returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(e.to_string()))?;

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| AppError::invalid_payload(format!("not JSON: {}", e)))?;
        let serde_json::Value::Array(rows) = value else {
            return Err(AppError::invalid_payload("expected a JSON array of rows"));
        };

        let records = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value::<RawProductRow>(row).ok())
            .map(ProductRecord::from_raw)
            .collect();
        Ok(records)
    }
}

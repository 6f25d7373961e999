/// Engine configuration - all settings of the kiosk core
///
/// # Environment variables
///
/// Every setting can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_URL | http://localhost:3000/catalog | Sheet-backed catalog endpoint |
/// | ANALYTICS_URL | http://localhost:3000/events | Analytics collection endpoint |
/// | STORE_NUMBER | (unset) | Store number passed to the catalog fetch |
/// | BRANCH_ID | (unset) | Branch identifier for per-branch suppression |
/// | FETCH_MAX_ATTEMPTS | 3 | Catalog fetch attempts before giving up |
/// | FETCH_RETRY_DELAY_MS | 2000 | Flat delay between catalog fetch attempts |
/// | DAILY_QUOTA_CAP | 30 | Per-city daily analytics quota |
/// | LOG_LEVEL | info | Log level |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog endpoint URL
    pub catalog_url: String,
    /// Analytics endpoint URL
    pub analytics_url: String,
    /// Store number query context, if known
    pub store_number: Option<String>,
    /// Branch identifier for suppression filtering, if known
    pub branch_id: Option<String>,
    /// Catalog fetch attempts before surfacing a fatal error
    pub fetch_max_attempts: u32,
    /// Flat delay between catalog fetch attempts
    pub fetch_retry_delay_ms: u64,
    /// Per-city daily analytics quota
    pub daily_quota_cap: u32,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            catalog_url: std::env::var("CATALOG_URL")
                .unwrap_or_else(|_| "http://localhost:3000/catalog".into()),
            analytics_url: std::env::var("ANALYTICS_URL")
                .unwrap_or_else(|_| "http://localhost:3000/events".into()),
            store_number: std::env::var("STORE_NUMBER").ok().filter(|s| !s.is_empty()),
            branch_id: std::env::var("BRANCH_ID").ok().filter(|s| !s.is_empty()),
            fetch_max_attempts: std::env::var("FETCH_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::catalog::MAX_FETCH_ATTEMPTS),
            fetch_retry_delay_ms: std::env::var("FETCH_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::catalog::RETRY_DELAY_MS),
            daily_quota_cap: std::env::var("DAILY_QUOTA_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::gate::DEFAULT_DAILY_QUOTA),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override endpoints for a fixed test setup
    pub fn with_overrides(
        catalog_url: impl Into<String>,
        analytics_url: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.catalog_url = catalog_url.into();
        config.analytics_url = analytics_url.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

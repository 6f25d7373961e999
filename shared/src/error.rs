//! Unified error type for the kiosk core
//!
//! Only genuinely fatal conditions become errors here. Date parsing is
//! fail-open by policy, knowledge misses return `None`, and gate
//! rejections are structured decisions - none of those go through
//! [`AppError`].

use thiserror::Error;

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog endpoint unreachable after retry exhaustion
    #[error("Catalog fetch failed: {message}")]
    FetchFailed { message: String },

    /// Catalog payload is not the expected JSON array shape
    #[error("Invalid catalog payload: {message}")]
    InvalidPayload { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    // ========== Convenient constructors ==========

    /// Create a FetchFailed error
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    /// Create an InvalidPayload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Transient errors may be retried; payload-shape errors may not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

/// Result type for engine operations
pub type AppResult<T> = Result<T, AppError>;

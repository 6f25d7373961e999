//! Shared types for the kiosk ordering core
//!
//! Common types used across the engine crates: catalog models,
//! domain enums, error types, and business-time utilities.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult};
pub use types::{DrinkType, Language};

//! Catalog Module
//!
//! Fetching the sheet-backed feed and collapsing it into display
//! groups with resolved, promotion-aware pricing.

mod fetch;
mod normalizer;

pub use fetch::*;
pub use normalizer::*;

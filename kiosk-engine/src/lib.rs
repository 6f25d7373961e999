//! Context-aware recommendation and promotion evaluation engine
//!
//! Core logic behind the kiosk ordering front-end: catalog
//! normalization with promotion-aware pricing, knowledge-base lookup,
//! context-driven drink recommendation, and rate/quota gating for
//! outbound analytics. Screens, cart state, and i18n live in the
//! front-end; this crate only computes.

pub mod analytics;
pub mod catalog;
pub mod common;
pub mod core;
pub mod gate;
pub mod knowledge;
pub mod promotion;
pub mod recommend;
pub mod temporal;

// Re-exports
pub use catalog::{CatalogClient, NormalizedCatalog, normalize};
pub use crate::core::Config;
pub use gate::{GateDecision, GateReason, MemoryCounterStore, RateQuotaGate};
pub use promotion::is_promotion_active;
pub use recommend::recommend;
pub use temporal::{RangePolicy, is_date_in_range, parse_feed_date};

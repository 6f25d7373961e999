//! Data models
//!
//! Shared between the engine and the kiosk front-end (via API).
//! Raw feed rows are loosely typed; everything past the coercion
//! boundary in `product.rs` is strictly typed.

pub mod context;
pub mod group;
pub mod knowledge;
pub mod product;

// Re-exports
pub use context::*;
pub use group::*;
pub use knowledge::*;
pub use product::*;

//! Analytics Module
//!
//! Outbound event metadata and the best-effort transport. Callers gate
//! events through [`crate::gate`] before handing them here.

mod emitter;
mod event;

pub use emitter::*;
pub use event::*;

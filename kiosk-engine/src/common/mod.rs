//! Common infrastructure
//!
//! Logging setup shared by kiosk binaries and tests.

pub mod logger;

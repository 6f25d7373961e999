//! Logging Infrastructure
//!
//! Structured logging setup for development and production: pretty
//! console output in development, JSON in production, with an optional
//! daily-rotating file appender.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system with an optional rotating file
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - JSON output (true for production, false for development)
/// * `log_dir` - Optional directory for daily-rotated file logging
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            fs::create_dir_all(Path::new(dir))?;
            let file_log = RollingFileAppender::new(Rotation::DAILY, dir, "kiosk");
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(file_log));
            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_filter(EnvFilter::new(level));

        if let Some(dir) = log_dir {
            fs::create_dir_all(Path::new(dir))?;
            let file_log = RollingFileAppender::new(Rotation::DAILY, dir, "kiosk");
            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file_log));
            subscriber.with(console_layer).with(file_layer).init();
        } else {
            subscriber.with(console_layer).init();
        }
    }

    Ok(())
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

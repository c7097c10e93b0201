//! Logging Infrastructure
//!
//! Structured logging setup for the console: console output (pretty in
//! development, JSON in production) plus an optional daily-rotating file
//! layer under the console data directory.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"), overridable via
///   `RUST_LOG`
/// * `json_format` - JSON output (production) vs pretty output (development)
/// * `log_dir` - Optional directory for daily-rotating file logs
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "console");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(appender))
                    .boxed(),
            )
        }
        None => None,
    };

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };
    subscriber.with(console_layer).with(file_layer).init();

    Ok(())
}

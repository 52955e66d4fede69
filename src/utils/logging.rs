// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored cli status lines

use crate::config::LoggingConfig;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the configured verbosity when set.
pub fn init_logger(config: &LoggingConfig) {
    let level = if config.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(config.verbose)
        .with_line_number(config.verbose)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(config.color);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

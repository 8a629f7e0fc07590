//! Logging service

use crate::models::LogLevel;

/// Target of operational events (failed pushes, failed chat sends)
pub const OPERATIONAL_TARGET: &str = "pushrelay::delivery";

/// Target of diagnostic events carrying pretty-printed pushed documents
pub const DOCUMENT_TARGET: &str = "pushrelay::documents";

/// Build the env-filter directive string for a level
pub fn filter_directives(level: LogLevel) -> String {
    let level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    format!("pushrelay={level},pushrelay_core={level},pushrelay_cli={level}")
}

/// Initialize logging with the specified level. `RUST_LOG` wins when set.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(filter_directives(level)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()?;

    Ok(())
}

//! Structured console logging for walletpersona
//!
//! Same calling convention everywhere in the crate:
//!
//! ```rust
//! use walletpersona::logger::{self, LogTag};
//!
//! logger::info(LogTag::Webserver, "Listening on 127.0.0.1:3000");
//! logger::warning(LogTag::Provider, "Transfer history unavailable, using empty list");
//! logger::debug(LogTag::Cache, "Result cache hit"); // Only with --debug-cache
//! logger::verbose(LogTag::Analyzer, "Raw aggregate: ..."); // Only with --verbose
//! ```
//!
//! Call [`init`] once at startup so `--debug-<tag>` / `--verbose` / `--quiet`
//! flags are picked up. Without it every tag logs at Info and above.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line arguments
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (shown unless --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, gated by `--debug-<tag>`
///
/// ```ignore
/// // Only shown with --debug-provider
/// logger::debug(LogTag::Provider, "alchemy_getAssetTransfers returned 412 records");
/// ```
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level, gated by `--verbose` or `--verbose-<tag>`
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

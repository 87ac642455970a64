/// Runtime logger configuration
///
/// Built once from command-line flags by [`init_from_args`], replaceable in
/// tests through [`set_logger_config`].
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level printed for non-gated messages
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<String>,
    /// Tags with `--verbose-<tag>` enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty, only these tags are printed
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG.read().clone()
}

pub fn set_logger_config(config: LoggerConfig) {
    *LOGGER_CONFIG.write() = config;
}

/// Scan the process arguments for logging flags
///
/// Recognized: `--quiet`, `--verbose`, `--log-level <level>`,
/// `--debug-<tag>`, `--verbose-<tag>`, `--only-<tag>`.
pub fn init_from_args() {
    let args = arguments::get_cmd_args();
    let mut config = LoggerConfig::default();

    if arguments::has_arg("--quiet") {
        config.min_level = LogLevel::Error;
    }
    if let Some(level) = arguments::get_arg_value("--log-level").and_then(|v| LogLevel::parse(&v)) {
        config.min_level = level;
    }
    if arguments::has_arg("--verbose") {
        config.min_level = LogLevel::Verbose;
    }

    for arg in &args {
        if let Some(tag) = arg.strip_prefix("--debug-") {
            config.debug_tags.insert(tag.to_lowercase());
        } else if let Some(tag) = arg.strip_prefix("--verbose-") {
            config.verbose_tags.insert(tag.to_lowercase());
        } else if let Some(tag) = arg.strip_prefix("--only-") {
            config.enabled_tags.insert(tag.to_lowercase());
        }
    }

    set_logger_config(config);
}

pub(super) fn is_debug_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.min_level >= LogLevel::Debug || config.debug_tags.contains(&tag.to_debug_key())
}

pub(super) fn is_verbose_enabled_for_tag(config: &LoggerConfig, tag: &LogTag) -> bool {
    config.min_level == LogLevel::Verbose || config.verbose_tags.contains(&tag.to_debug_key())
}

/// Core logging implementation with automatic filtering
use super::config::{get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Debug requires `--debug-<tag>` (or a Debug/Verbose minimum level)
/// 3. Verbose requires `--verbose` or `--verbose-<tag>`
/// 4. Everything else is compared against the minimum level
/// 5. If enabled_tags is non-empty, the tag must be in the set
pub fn should_log(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    let allowed = match level {
        LogLevel::Debug => is_debug_enabled_for_tag(config, tag),
        LogLevel::Verbose => is_verbose_enabled_for_tag(config, tag),
        _ => level <= config.min_level,
    };
    if !allowed {
        return false;
    }

    config.enabled_tags.is_empty() || config.enabled_tags.contains(&tag.to_debug_key())
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&get_logger_config(), &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_pass() {
        let config = LoggerConfig {
            min_level: LogLevel::Error,
            ..LoggerConfig::default()
        };
        assert!(should_log(&config, &LogTag::Cache, LogLevel::Error));
        assert!(!should_log(&config, &LogTag::Cache, LogLevel::Warning));
    }

    #[test]
    fn test_debug_gated_per_tag() {
        let mut config = LoggerConfig::default();
        assert!(!should_log(&config, &LogTag::Provider, LogLevel::Debug));

        config.debug_tags.insert("provider".to_string());
        assert!(should_log(&config, &LogTag::Provider, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Cache, LogLevel::Debug));
        assert!(!should_log(&config, &LogTag::Provider, LogLevel::Verbose));
    }

    #[test]
    fn test_enabled_tags_filter() {
        let mut config = LoggerConfig::default();
        config.enabled_tags.insert("webserver".to_string());
        assert!(should_log(&config, &LogTag::Webserver, LogLevel::Info));
        assert!(!should_log(&config, &LogTag::Analyzer, LogLevel::Info));
    }
}

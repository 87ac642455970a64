/// Configuration loading helpers
use super::schemas::Config;
use crate::logger::{self, LogTag};
use std::path::Path;

/// Default configuration file path
pub const CONFIG_FILE_PATH: &str = "data/config.toml";

/// Load configuration from the default path
pub fn load_config() -> Result<Config, String> {
    load_config_from_path(CONFIG_FILE_PATH)
}

/// Load configuration from a specific file path
///
/// A missing file is not an error: defaults from the schema definitions are
/// used. A present but malformed file is.
pub fn load_config_from_path(path: &str) -> Result<Config, String> {
    if !Path::new(path).exists() {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

    toml::from_str::<Config>(&contents)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path, e))
}

/// Apply environment overrides on top of a loaded configuration
///
/// `ALCHEMY_API_KEY` replaces the provider key, `PORT` the listen port.
/// The lookup is injected so tests don't touch the process environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("ALCHEMY_API_KEY").filter(|k| !k.trim().is_empty()) {
        config.provider.api_key = key.trim().to_string();
    }

    if let Some(port) = lookup("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => logger::warning(
                LogTag::Config,
                &format!("Ignoring invalid PORT value '{}'", port),
            ),
        }
    }
}

/// Centralized command-line argument handling
///
/// Arguments are captured once into `CMD_ARGS`; binaries and tests can
/// override them with [`set_cmd_args`]. Debug flags follow the
/// `--debug-<module>` convention used by the logger.
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::env;

/// Global command-line arguments storage
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
pub fn set_cmd_args(args: Vec<String>) {
    *CMD_ARGS.lock() = args;
}

/// Gets a copy of the current command-line arguments
pub fn get_cmd_args() -> Vec<String> {
    CMD_ARGS.lock().clone()
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

// =============================================================================
// DEBUG FLAGS
// =============================================================================

pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

pub fn is_debug_analyzer_enabled() -> bool {
    has_arg("--debug-analyzer")
}

pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache")
}

pub fn is_debug_provider_enabled() -> bool {
    has_arg("--debug-provider")
}

pub fn is_debug_rate_limit_enabled() -> bool {
    has_arg("--debug-rate-limit")
}

/// All debug modes currently switched on
pub fn get_enabled_debug_modes() -> Vec<&'static str> {
    let mut modes = Vec::new();
    if is_debug_webserver_enabled() {
        modes.push("webserver");
    }
    if is_debug_analyzer_enabled() {
        modes.push("analyzer");
    }
    if is_debug_cache_enabled() {
        modes.push("cache");
    }
    if is_debug_provider_enabled() {
        modes.push("provider");
    }
    if is_debug_rate_limit_enabled() {
        modes.push("rate-limit");
    }
    modes
}

// =============================================================================
// SERVER OPTIONS
// =============================================================================

/// `--config <path>` override for the TOML file location
pub fn get_config_path() -> Option<String> {
    get_arg_value("--config")
}

/// `--port <port>` override; ignored when not a valid port number
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port").and_then(|p| p.parse().ok())
}

pub fn is_help_requested() -> bool {
    has_arg("--help") || has_arg("-h")
}

pub fn print_help() {
    println!("walletpersona - Ethereum wallet personality checker");
    println!();
    println!("USAGE:");
    println!("    walletpersona [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --config <path>           Configuration file (default: data/config.toml)");
    println!("    --port <port>             Override the configured listen port");
    println!("    --log-level <level>       Minimum log level (error, warning, info, debug, verbose)");
    println!("    --quiet                   Only print errors");
    println!("    --verbose                 Print everything, including verbose traces");
    println!("    --help, -h                Show this help message");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-analyzer          Analysis pipeline debug mode");
    println!("    --debug-cache             Result/price cache debug mode");
    println!("    --debug-provider          Upstream data provider debug mode");
    println!("    --debug-rate-limit        Rate limiter debug mode");
    println!("    --debug-webserver         HTTP request debug mode");
    println!();
    println!("ENVIRONMENT:");
    println!("    ALCHEMY_API_KEY           API key for the upstream data provider");
    println!("    PORT                      Listen port (overridden by --port)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_value_lookup() {
        set_cmd_args(vec![
            "walletpersona".to_string(),
            "--port".to_string(),
            "4000".to_string(),
            "--debug-cache".to_string(),
            "--config".to_string(),
        ]);

        assert_eq!(get_port_override(), Some(4000));
        assert!(is_debug_cache_enabled());
        assert!(!is_debug_provider_enabled());
        assert_eq!(get_enabled_debug_modes(), vec!["cache"]);
        // Trailing flag without a value
        assert_eq!(get_config_path(), None);
    }
}

/// Subsystem tags attached to every log line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    RateLimit,
    Analyzer,
    Cache,
    Provider,
    Price,
    Other(String),
}

impl LogTag {
    /// Key used by `--debug-<key>` / `--verbose-<key>` flags
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Config => "config".to_string(),
            LogTag::Webserver => "webserver".to_string(),
            LogTag::RateLimit => "rate-limit".to_string(),
            LogTag::Analyzer => "analyzer".to_string(),
            LogTag::Cache => "cache".to_string(),
            LogTag::Provider => "provider".to_string(),
            LogTag::Price => "price".to_string(),
            LogTag::Other(name) => name.to_lowercase(),
        }
    }

    /// Uncolored label as printed in the tag column
    pub fn label(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Config => "CONFIG".to_string(),
            LogTag::Webserver => "WEBSERVER".to_string(),
            LogTag::RateLimit => "RATELIMIT".to_string(),
            LogTag::Analyzer => "ANALYZER".to_string(),
            LogTag::Cache => "CACHE".to_string(),
            LogTag::Provider => "PROVIDER".to_string(),
            LogTag::Price => "PRICE".to_string(),
            LogTag::Other(name) => name.to_uppercase(),
        }
    }
}

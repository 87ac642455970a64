/// Error taxonomy for the analysis pipeline
///
/// Classification and aggregation are total and never produce these;
/// only validation, rate limiting and upstream I/O do.
use thiserror::Error;

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("Invalid Ethereum address format: {input}")]
    InvalidAddress { input: String },

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Upstream {operation} failed: {message}")]
    Upstream { operation: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalyzerError {
    pub fn upstream(operation: &str, message: impl ToString) -> Self {
        AnalyzerError::Upstream {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// HTTP status the web layer maps this error to
    pub fn status_code(&self) -> u16 {
        match self {
            AnalyzerError::InvalidAddress { .. } => 400,
            AnalyzerError::RateLimited { .. } => 429,
            _ => 500,
        }
    }

    /// Whether the caller may retry the same request later
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalyzerError::RateLimited { .. } | AnalyzerError::Upstream { .. }
        )
    }
}

impl From<reqwest::Error> for AnalyzerError {
    fn from(e: reqwest::Error) -> Self {
        AnalyzerError::upstream("request", e)
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let invalid = AnalyzerError::InvalidAddress {
            input: "0x12".to_string(),
        };
        assert_eq!(invalid.status_code(), 400);
        assert!(!invalid.is_recoverable());

        let limited = AnalyzerError::RateLimited { retry_after_secs: 12 };
        assert_eq!(limited.status_code(), 429);
        assert!(limited.is_recoverable());

        let upstream = AnalyzerError::upstream("eth_getBalance", "connection reset");
        assert_eq!(upstream.status_code(), 500);
        assert_eq!(
            upstream.to_string(),
            "Upstream eth_getBalance failed: connection reset"
        );
    }
}

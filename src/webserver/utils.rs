/// Response helpers shared by route handlers
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::{
    errors::AnalyzerError,
    logger::{self, LogTag},
};

pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid Ethereum address format";
pub const INVALID_ADDRESS_HINT: &str = "Address should be 42 characters starting with '0x'";
pub const RATE_LIMITED_MESSAGE: &str = "Rate limit exceeded. Try again later.";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";
/// Returned in place of internal error details
pub const GENERIC_FAILURE_DETAIL: &str = "Unable to analyze wallet right now. Please try again later.";

/// JSON error body; optional fields are omitted when unset
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "retryAfter", skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ErrorBody {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            hint: None,
            retry_after: None,
            message: None,
            timestamp: None,
        }
    }
}

/// 200 with a JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

pub fn error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}

fn rate_limited_response(retry_after_secs: u64) -> Response {
    error_response(
        StatusCode::TOO_MANY_REQUESTS,
        ErrorBody {
            retry_after: Some(retry_after_secs),
            ..ErrorBody::new(RATE_LIMITED_MESSAGE)
        },
    )
}

/// Map a pipeline error to its HTTP response
///
/// Upstream, parse and config errors are logged in full but answered with
/// a generic message.
pub fn analyzer_error_response(error: &AnalyzerError) -> Response {
    match error {
        AnalyzerError::InvalidAddress { .. } => error_response(
            StatusCode::BAD_REQUEST,
            ErrorBody {
                hint: Some(INVALID_ADDRESS_HINT.to_string()),
                ..ErrorBody::new(INVALID_ADDRESS_MESSAGE)
            },
        ),
        AnalyzerError::RateLimited { retry_after_secs } => rate_limited_response(*retry_after_secs),
        other => {
            let detail = format!("Analysis failed: {}", other);
            if other.is_recoverable() {
                logger::warning(LogTag::Webserver, &detail);
            } else {
                logger::error(LogTag::Webserver, &detail);
            }
            let status = StatusCode::from_u16(other.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(
                status,
                ErrorBody {
                    message: Some(GENERIC_FAILURE_DETAIL.to_string()),
                    timestamp: Some(chrono::Utc::now().timestamp_millis()),
                    ..ErrorBody::new(ANALYSIS_FAILED_MESSAGE)
                },
            )
        }
    }
}

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy for backend calls.
///
/// `Unauthorized` is deliberately distinct from `Request`: a 401 clears
/// the session and callers must not treat it as a generic failure.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized - session expired or invalid")]
    Unauthorized,

    #[error("{message}")]
    Request { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in log output
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Fallback message when the backend supplies no detail field
const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// The cut is made on a char boundary so multi-byte text (the
    /// backend's error messages are Chinese) never splits a character.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    /// Classify a non-2xx response. The backend reports errors as
    /// `{"detail": "..."}`; when that shape is absent the generic
    /// failure message is used instead.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::Unauthorized;
        }

        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::to_owned)
            });

        let message = match detail {
            Some(detail) => detail,
            None => {
                debug!(
                    status = status.as_u16(),
                    body = %Self::truncate_body(body),
                    "Error response without detail field"
                );
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        };

        ApiError::Request { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

//! Errors returned by the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

use crate::classifier::ErrorResult;
use crate::error::SentixError;

/// A request the boundary refuses or fails to serve.
///
/// The `Display` text is what the client sees; internal causes are logged,
/// never sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or missing `text` field.
    #[error("Invalid request")]
    InvalidRequest,

    /// Input longer than the configured maximum.
    #[error("Input text exceeds the maximum length of {limit} characters.")]
    PayloadTooLarge { limit: usize },

    /// Unexpected fault while analyzing.
    #[error("An internal error occurred.")]
    Internal(#[source] SentixError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            error!("analysis failed: {source}");
        }

        let body = ErrorResult::new(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::PayloadTooLarge { limit: 10 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::Internal(SentixError::other("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_hides_cause() {
        let error = ApiError::Internal(SentixError::scoring("secret backend detail"));
        assert_eq!(error.to_string(), "An internal error occurred.");
    }

    #[test]
    fn test_payload_too_large_message() {
        let error = ApiError::PayloadTooLarge { limit: 15_000 };
        assert_eq!(
            error.to_string(),
            "Input text exceeds the maximum length of 15000 characters."
        );
    }
}

//! Routes and handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use log::debug;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::classifier::{AnalysisClassifier, AnalysisOutcome};

const DASHBOARD_HTML: &str = include_str!("dashboard.html");
const MAX_INPUT_CHARS_PLACEHOLDER: &str = "{{MAX_INPUT_CHARS}}";

// JSON may spell one character as a surrogate-pair escape (12 bytes); the
// rest covers the envelope.
const BYTES_PER_CHAR: usize = 12;
const ENVELOPE_BYTES: usize = 4096;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

/// State shared by all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    classifier: Arc<AnalysisClassifier>,
    max_input_chars: usize,
    dashboard: Bytes,
}

impl AppState {
    pub fn new(classifier: Arc<AnalysisClassifier>, max_input_chars: usize) -> Self {
        AppState {
            classifier,
            max_input_chars,
            dashboard: Bytes::from(render_dashboard(max_input_chars)),
        }
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Largest request body that can still carry an acceptable text.
    pub fn body_limit(&self) -> usize {
        self.max_input_chars
            .saturating_mul(BYTES_PER_CHAR)
            .saturating_add(ENVELOPE_BYTES)
    }

    fn reject(&self, rejection: JsonRejection) -> ApiError {
        debug!("rejected request body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                limit: self.max_input_chars,
            }
        } else {
            ApiError::InvalidRequest
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.body_limit();

    Router::new()
        .route("/", get(dashboard))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// The dashboard page with the input limit filled in.
pub fn render_dashboard(max_input_chars: usize) -> String {
    DASHBOARD_HTML.replace(MAX_INPUT_CHARS_PLACEHOLDER, &max_input_chars.to_string())
}

async fn dashboard(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.dashboard)
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, ApiError> {
    let Json(request) = payload.map_err(|rejection| state.reject(rejection))?;
    let text = request.text.ok_or(ApiError::InvalidRequest)?;

    let length = text.chars().count();
    if length > state.max_input_chars {
        debug!(
            "rejected {length} chars, limit is {}",
            state.max_input_chars
        );
        return Err(ApiError::PayloadTooLarge {
            limit: state.max_input_chars,
        });
    }

    let classifier = Arc::clone(&state.classifier);
    let outcome = tokio::task::spawn_blocking(move || classifier.analyze(&text))
        .await
        .map_err(|e| {
            let fault = anyhow::Error::new(e).context("analysis task failed");
            ApiError::Internal(fault.into())
        })?
        .map_err(ApiError::Internal)?;

    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_input_chars: usize) -> AppState {
        let classifier = AnalysisClassifier::with_defaults().unwrap();
        AppState::new(Arc::new(classifier), max_input_chars)
    }

    #[test]
    fn test_body_limit_covers_escaped_text() {
        let state = state(15_000);

        assert_eq!(state.max_input_chars(), 15_000);
        assert_eq!(state.body_limit(), 15_000 * 12 + 4096);
    }

    #[test]
    fn test_body_limit_saturates() {
        assert_eq!(state(usize::MAX).body_limit(), usize::MAX);
    }

    #[test]
    fn test_dashboard_shows_configured_limit() {
        let html = render_dashboard(2_500);

        assert!(html.contains("const MAX_CHARS = 2500;"));
        assert!(html.contains("0 / 2500"));
        assert!(!html.contains(MAX_INPUT_CHARS_PLACEHOLDER));
    }

    #[test]
    fn test_request_text_is_optional() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
    }
}

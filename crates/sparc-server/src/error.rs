use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sparc_core::config::Environment;
use sparc_core::error::SparcError;

const GENERATION_FAILED: &str = "Failed to generate SPARC documentation";
const SANITIZED_MESSAGE: &str = "An unexpected error occurred";

// ---------------------------------------------------------------------------
// Internal sentinels carried through the anyhow chain
// ---------------------------------------------------------------------------

/// An explicit 400 with optional per-field details.
#[derive(Debug)]
struct BadRequest {
    error: String,
    details: Vec<String>,
}

impl std::fmt::Display for BadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for BadRequest {}

/// A pipeline failure, with the message already sanitized for the
/// environment and the elapsed time at the point of failure.
#[derive(Debug)]
struct GenerationFailed {
    message: String,
    generation_time: u64,
}

impl std::fmt::Display for GenerationFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{GENERATION_FAILED}: {}", self.message)
    }
}

impl std::error::Error for GenerationFailed {}

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request with a list of details.
    pub fn bad_request(error: impl Into<String>, details: Vec<String>) -> Self {
        Self(
            BadRequest {
                error: error.into(),
                details,
            }
            .into(),
        )
    }

    /// Map a pipeline error. Input problems become 400; everything else is
    /// a 500 whose message hides the cause chain in production.
    pub fn from_pipeline(err: SparcError, started: Instant, environment: Environment) -> Self {
        if let SparcError::InvalidInput(errors) = err.root_cause() {
            return Self::bad_request("Invalid input", errors.clone());
        }
        Self::generation_failed(anyhow::Error::from(err), started, environment)
    }

    /// A 500 carrying `generationTime`. The cause chain is logged and only
    /// shown to clients outside production.
    pub fn generation_failed(
        err: anyhow::Error,
        started: Instant,
        environment: Environment,
    ) -> Self {
        let generation_time = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let detail = format!("{err:#}");
        tracing::error!(error = %detail, generation_time, "generation failed");
        let message = if environment.is_production() {
            SANITIZED_MESSAGE.to_string()
        } else {
            detail
        };
        Self(
            GenerationFailed {
                message,
                generation_time,
            }
            .into(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(b) = self.0.downcast_ref::<BadRequest>() {
            let mut body = serde_json::json!({ "error": b.error });
            if !b.details.is_empty() {
                body["details"] = serde_json::json!(b.details);
            }
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }
        if let Some(g) = self.0.downcast_ref::<GenerationFailed>() {
            let body = serde_json::json!({
                "error": GENERATION_FAILED,
                "message": g.message,
                "generationTime": g.generation_time,
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        }

        let status = match self.0.downcast_ref::<SparcError>() {
            Some(e) if e.is_user_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

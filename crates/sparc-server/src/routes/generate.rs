use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use sparc_core::pipeline::{self, FeatureRequest, SparcOutput};
use sparc_core::validate::validate_input;

use crate::error::AppError;
use crate::state::AppState;

/// POST /generate: run the full pipeline for one feature description.
///
/// Malformed bodies and descriptions that fail validation answer 400 with
/// details. When `generation.elaborate` is on, each phase document is sent
/// to the content generator before scaffolding.
pub async fn generate(
    State(app): State<AppState>,
    payload: Result<Json<FeatureRequest>, JsonRejection>,
) -> Result<Json<SparcOutput>, AppError> {
    let Json(request) = payload
        .map_err(|rej| AppError::bad_request("Invalid request body", vec![rej.body_text()]))?;
    let started = Instant::now();
    let environment = app.config.server.environment;

    let validation = validate_input(&request.description);
    if !validation.is_valid {
        tracing::info!(errors = ?validation.errors, "rejected generation request");
        return Err(AppError::bad_request("Invalid input", validation.errors));
    }

    let provider = request.options.ai_provider;
    let mut generation = tokio::task::spawn_blocking(move || pipeline::plan(&request))
        .await
        .map_err(|e| {
            AppError::generation_failed(
                anyhow::anyhow!("task join error: {e}"),
                started,
                environment,
            )
        })?
        .map_err(|e| AppError::from_pipeline(e, started, environment))?;

    if app.config.generation.elaborate {
        let count = sparc_agent::elaborate(
            &mut generation,
            app.generator.as_ref(),
            provider,
            &app.retry,
        )
        .await;
        tracing::info!(%provider, phases = count, "phase documents elaborated");
    }

    let output = generation
        .finish()
        .map_err(|e| AppError::from_pipeline(e, started, environment))?;
    Ok(Json(output))
}

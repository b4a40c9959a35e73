//! Axum route handlers for the run API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::pipeline::models::{RunOutput, RunRequest};
use crate::pipeline::orchestrator::run_pipeline;
use crate::state::AppState;

/// POST /api/v1/runs
///
/// Executes the full pipeline for one profile URL and returns the output
/// bundle. A failed run returns an error record and emits no output; a
/// degraded run (missing profile fields, empty searches) still returns a
/// full best-effort bundle.
pub async fn handle_run(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunOutput>, AppError> {
    if request.linkedin_profile_url.trim().is_empty() {
        return Err(AppError::Validation(
            "linkedin_profile_url cannot be empty".to_string(),
        ));
    }

    let output = run_pipeline(
        state.profile_fetcher.as_ref(),
        state.job_searcher.as_ref(),
        &state.llm,
        state.kv.as_ref(),
        state.meter.as_ref(),
        request,
    )
    .await?;

    Ok(Json(output))
}

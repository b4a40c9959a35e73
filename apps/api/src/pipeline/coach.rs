//! Job Selection & Coaching Step — one extraction call selecting the
//! best-fit jobs and drafting their cover letters.

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, Usage};
use crate::pipeline::models::JobCoachingResult;
use crate::pipeline::prompts::{JOB_COACHING_PROMPT_TEMPLATE, JOB_COACHING_SYSTEM};
use crate::profile::models::CanonicalProfile;

/// Upper bound on selections, clamped locally like the analyzer's titles.
pub const MAX_SELECTIONS: usize = 5;

/// Asks the LLM to pick the best-fit jobs from the pool and draft a cover
/// letter for each, plus an executive summary.
///
/// Same failure policy as the analysis step: propagates and aborts the run.
pub async fn select_jobs(
    profile: &CanonicalProfile,
    pool: &[Value],
    llm: &LlmClient,
) -> Result<(JobCoachingResult, Usage), AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;
    let jobs_json = serde_json::to_string_pretty(pool)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize job pool: {e}")))?;

    let prompt = JOB_COACHING_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{jobs_json}", &jobs_json);
    let system = format!("{JOB_COACHING_SYSTEM} {JSON_ONLY_SYSTEM}");

    let extraction = llm
        .call_structured::<JobCoachingResult>(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Job coaching failed: {e}")))?;

    Ok((clamp_selections(extraction.value), extraction.usage))
}

fn clamp_selections(mut result: JobCoachingResult) -> JobCoachingResult {
    result.selected_jobs.truncate(MAX_SELECTIONS);
    result
}

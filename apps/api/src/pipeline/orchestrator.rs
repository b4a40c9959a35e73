//! Pipeline Orchestrator — drives one run end to end.
//!
//! Stages advance strictly forward with no retries between them: a model or
//! persistence failure aborts the run with no output record. Degraded
//! fetches (missing profile, empty searches) keep the run going and only
//! lower report quality.
//!
//! Side effects at checkpoints: the canonical profile is persisted right
//! after `ProfileFetched`, the enriched selections after `Joined`, the
//! report after `Rendered`. Metering events are advisory and never gate
//! progress.

use chrono::Utc;
use futures::future::join_all;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::metering::{
    billed_token_units, UsageMeter, EVENT_INIT, EVENT_LLM_TOKENS, EVENT_TOOL_RESULT,
};
use crate::pipeline::analyzer::analyze_profile;
use crate::pipeline::coach::select_jobs;
use crate::pipeline::joiner::join_selected_jobs;
use crate::pipeline::models::{RunOutput, RunRequest};
use crate::pipeline::report::render_report;
use crate::profile::normalizer::normalize;
use crate::scrape::{JobSearcher, ProfileFetcher};
use crate::storage::{KvStore, KEY_LINKEDIN_PROFILE, KEY_MARKDOWN_REPORT, KEY_SELECTED_JOBS};

/// Checkpoint states of one run, strictly forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Init,
    ProfileFetched,
    TitlesAnalyzed,
    JobsCollected,
    JobsSelected,
    Joined,
    Rendered,
    Published,
}

/// Runs the whole pipeline for one profile URL and returns the output bundle.
pub async fn run_pipeline(
    fetcher: &dyn ProfileFetcher,
    searcher: &dyn JobSearcher,
    llm: &LlmClient,
    kv: &dyn KvStore,
    meter: &dyn UsageMeter,
    request: RunRequest,
) -> Result<RunOutput, AppError> {
    let run_id = Uuid::new_v4();
    info!(%run_id, stage = ?Stage::Init, url = %request.linkedin_profile_url, "run started");
    meter.charge(EVENT_INIT, 1).await;

    // Fetch + normalize. A failed fetch degrades to the empty profile.
    let raw_profile = fetcher.fetch(&request.linkedin_profile_url).await;
    if raw_profile.is_some() {
        meter.charge(EVENT_TOOL_RESULT, 1).await;
    }
    let profile = normalize(raw_profile.as_ref().unwrap_or(&Value::Null));
    info!(%run_id, stage = ?Stage::ProfileFetched, degraded = raw_profile.is_none(), "profile normalized");

    persist(kv, KEY_LINKEDIN_PROFILE, &to_value(&profile)?).await?;

    // Title extraction. No recovery: without titles there is no run.
    let (titles, usage) = analyze_profile(&profile, llm).await?;
    meter
        .charge(EVENT_LLM_TOKENS, billed_token_units(usage.total_tokens()))
        .await;
    info!(%run_id, stage = ?Stage::TitlesAnalyzed, ?titles, "job titles suggested");

    // Search fan-out, one call per title, merged in title order.
    let location = profile.search_location();
    let batches = collect_job_pool(searcher, &titles, &location).await;
    for batch in &batches {
        meter.charge(EVENT_TOOL_RESULT, batch.len() as u64).await;
    }
    let pool: Vec<Value> = batches.into_iter().flatten().collect();
    info!(%run_id, stage = ?Stage::JobsCollected, pool_size = pool.len(), %location, "job pool collected");

    // Selection + coaching.
    let (coaching, usage) = select_jobs(&profile, &pool, llm).await?;
    meter
        .charge(EVENT_LLM_TOKENS, billed_token_units(usage.total_tokens()))
        .await;
    info!(%run_id, stage = ?Stage::JobsSelected, selected = coaching.selected_jobs.len(), "jobs selected");

    // Join selections back to full listings.
    let enriched = join_selected_jobs(&coaching.selected_jobs, &pool);
    persist(kv, KEY_SELECTED_JOBS, &to_value(&enriched)?).await?;
    info!(%run_id, stage = ?Stage::Joined, "selections joined");

    // Render and persist the report.
    let report = render_report(&profile, &titles, &enriched, &coaching.summary, Utc::now());
    persist(kv, KEY_MARKDOWN_REPORT, &Value::String(report.clone())).await?;
    info!(%run_id, stage = ?Stage::Rendered, "report rendered");

    let output = RunOutput {
        linkedin_profile_info: profile,
        selected_job_titles: titles,
        selected_jobs: enriched,
        summary: coaching.summary,
        markdown_report: report,
    };
    info!(%run_id, stage = ?Stage::Published, "run complete");

    Ok(output)
}

/// Searches every title concurrently and returns one batch per title, in
/// title-list order regardless of completion order — the merge must stay
/// deterministic so downstream joins are reproducible.
async fn collect_job_pool(
    searcher: &dyn JobSearcher,
    titles: &[String],
    location: &str,
) -> Vec<Vec<Value>> {
    let searches = titles.iter().map(|title| searcher.search(title, location));
    join_all(searches).await
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize checkpoint: {e}")))
}

async fn persist(kv: &dyn KvStore, key: &str, value: &Value) -> Result<(), AppError> {
    kv.set(key, value)
        .await
        .map_err(|e| AppError::Storage(format!("failed to persist '{key}': {e:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    /// Searcher returning a fixed batch per title, with one failing title
    /// degraded to an empty batch (as the real client does).
    struct ScriptedSearcher;

    #[async_trait]
    impl JobSearcher for ScriptedSearcher {
        async fn search(&self, job_title: &str, _location: &str) -> Vec<Value> {
            match job_title {
                "empty" => Vec::new(),
                title => (0..3)
                    .map(|i| json!({"job_id": format!("{title}-{i}")}))
                    .collect(),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_search_result_contributes_nothing_to_pool() {
        let titles = vec!["empty".to_string(), "analyst".to_string()];
        let batches = collect_job_pool(&ScriptedSearcher, &titles, "Berlin").await;

        assert_eq!(batches.len(), 2);
        assert!(batches[0].is_empty());
        let pool: Vec<Value> = batches.into_iter().flatten().collect();
        assert_eq!(pool.len(), 3);
    }

    #[tokio::test]
    async fn test_pool_merge_follows_title_order() {
        let titles = vec!["alpha".to_string(), "beta".to_string()];
        let batches = collect_job_pool(&ScriptedSearcher, &titles, "Berlin").await;

        let pool: Vec<Value> = batches.into_iter().flatten().collect();
        assert_eq!(pool[0]["job_id"], "alpha-0");
        assert_eq!(pool[3]["job_id"], "beta-0");
    }

    #[tokio::test]
    async fn test_no_titles_means_empty_pool() {
        let batches = collect_job_pool(&ScriptedSearcher, &[], "Berlin").await;
        assert!(batches.is_empty());
    }
}

//! Profile Analysis Step — one extraction call producing candidate job titles.
//!
//! The titles drive the search fan-out and its metering, so the output is
//! clamped here rather than trusting the model's count.

use std::collections::HashSet;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, Usage};
use crate::pipeline::models::ProfileAnalysis;
use crate::pipeline::prompts::{PROFILE_ANALYZER_PROMPT_TEMPLATE, PROFILE_ANALYZER_SYSTEM};
use crate::profile::models::CanonicalProfile;

/// Upper bound on suggested titles, and thereby on search fan-out.
pub const MAX_TITLES: usize = 5;

/// Asks the LLM for the most relevant job titles for this profile.
///
/// Failure is not recovered locally: without titles there is nothing to
/// search, so the error propagates and aborts the run.
pub async fn analyze_profile(
    profile: &CanonicalProfile,
    llm: &LlmClient,
) -> Result<(Vec<String>, Usage), AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    let prompt = PROFILE_ANALYZER_PROMPT_TEMPLATE.replace("{profile_json}", &profile_json);
    let system = format!("{PROFILE_ANALYZER_SYSTEM} {JSON_ONLY_SYSTEM}");

    let extraction = llm
        .call_structured::<ProfileAnalysis>(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Profile analysis failed: {e}")))?;

    let titles = clamp_titles(extraction.value.relevant_job_titles);
    Ok((titles, extraction.usage))
}

/// At most `MAX_TITLES` distinct titles; first occurrences win, order kept.
fn clamp_titles(titles: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    titles
        .into_iter()
        .filter(|title| seen.insert(title.clone()))
        .take(MAX_TITLES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_titles_truncates_to_five() {
        let titles: Vec<String> = (1..=8).map(|i| format!("Title {i}")).collect();
        let clamped = clamp_titles(titles);
        assert_eq!(clamped.len(), 5);
        assert_eq!(clamped[0], "Title 1");
        assert_eq!(clamped[4], "Title 5");
    }

    #[test]
    fn test_clamp_titles_drops_duplicates_keeping_first() {
        let titles = vec![
            "Data Engineer".to_string(),
            "ML Engineer".to_string(),
            "Data Engineer".to_string(),
        ];
        assert_eq!(clamp_titles(titles), vec!["Data Engineer", "ML Engineer"]);
    }

    #[test]
    fn test_clamp_titles_preserves_order() {
        let titles = vec!["B".to_string(), "A".to_string(), "C".to_string()];
        assert_eq!(clamp_titles(titles), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_clamp_titles_on_empty_input() {
        assert!(clamp_titles(Vec::new()).is_empty());
    }
}

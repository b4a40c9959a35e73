//! Data models shared across the pipeline steps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::profile::models::CanonicalProfile;

/// Run input: the single structured record the service accepts.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    pub linkedin_profile_url: String,
}

/// Result schema of the profile-analysis extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    /// Job titles matching the profile, most relevant first.
    pub relevant_job_titles: Vec<String>,
}

/// One job chosen by the coaching step. `job_id` references the job pool;
/// a stale reference is handled by the joiner, never rejected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedJob {
    pub job_id: String,
    pub reason: String,
    pub cover_letter: String,
}

/// Result schema of the job-coaching extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCoachingResult {
    pub selected_jobs: Vec<SelectedJob>,
    pub summary: String,
}

/// A selected job merged with its full raw listing.
///
/// Kept as a JSON object map because listing fields are service-defined and
/// opaque. The joiner inserts `reason` and `cover_letter` last, so they win
/// over any same-named listing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedJob(pub Map<String, Value>);

impl EnrichedJob {
    /// String field accessor for rendering; non-string values read as absent.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Run output: the structured record pushed to the output sink.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    pub linkedin_profile_info: CanonicalProfile,
    pub selected_job_titles: Vec<String>,
    pub selected_jobs: Vec<EnrichedJob>,
    pub summary: String,
    pub markdown_report: String,
}

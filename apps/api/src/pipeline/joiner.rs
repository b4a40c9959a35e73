//! Result Joiner — merges the coaching step's selections back against the
//! full raw job records collected during the search fan-out.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::pipeline::models::{EnrichedJob, SelectedJob};

/// Joins each selection to its raw listing by `job_id`.
///
/// Output order equals selection order, never re-sorted. A `job_id` missing
/// from the pool still yields a record carrying only the rationale and cover
/// letter — a selection is never dropped.
pub fn join_selected_jobs(selected: &[SelectedJob], pool: &[Value]) -> Vec<EnrichedJob> {
    let index = index_by_job_id(pool);

    selected
        .iter()
        .map(|selection| {
            let mut fields: Map<String, Value> = index
                .get(selection.job_id.as_str())
                .and_then(|job| job.as_object())
                .map(|obj| (*obj).clone())
                .unwrap_or_default();

            // rationale and cover letter always win on key collision
            fields.insert(
                "reason".to_string(),
                Value::String(selection.reason.clone()),
            );
            fields.insert(
                "cover_letter".to_string(),
                Value::String(selection.cover_letter.clone()),
            );

            EnrichedJob(fields)
        })
        .collect()
}

/// Indexes the pool by string `job_id`; records without one are skipped.
/// Last occurrence wins on duplicate ids across title searches.
fn index_by_job_id(pool: &[Value]) -> HashMap<&str, &Value> {
    let mut index = HashMap::new();
    for job in pool {
        if let Some(id) = job.get("job_id").and_then(Value::as_str) {
            index.insert(id, job);
        }
    }
    index
}

//! Report Renderer — formats the run's results as a markdown document.
//!
//! Pure formatting: nothing here can fail. Missing fields render as `N/A`,
//! and the timestamp is a parameter so the output is fully determined by its
//! inputs.

use chrono::{DateTime, Utc};

use crate::pipeline::models::EnrichedJob;
use crate::profile::models::CanonicalProfile;

const PLACEHOLDER: &str = "N/A";

/// Renders the final markdown report in fixed section order: identity
/// header, suggested titles, one block per enriched job, executive summary.
pub fn render_report(
    profile: &CanonicalProfile,
    titles: &[String],
    jobs: &[EnrichedJob],
    summary: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut report = String::new();

    report.push_str(&format!("# Job Search Report for {}\n", full_name(profile)));
    report.push_str(&format!(
        "Generated on {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("## Profile Overview\n");
    report.push_str(&format!(
        "- **Current Headline**: {}\n",
        text_or_placeholder(profile.headline.as_deref())
    ));
    report.push_str(&format!("- **Location**: {}\n", profile_location(profile)));
    report.push_str(&format!(
        "- **LinkedIn URL**: {}\n\n",
        text_or_placeholder(profile.linkedin_url.as_deref())
    ));

    report.push_str("## Suggested Job Titles\n");
    report.push_str(
        "Based on your profile analysis, here are the most relevant job titles for your background:\n\n",
    );
    for title in titles {
        report.push_str(&format!("- {title}\n"));
    }

    report.push_str("\n## Selected Job Opportunities\n\n");
    for job in jobs {
        report.push_str(&format!(
            "### {} at {}\n",
            job_field(job, "title"),
            job_field(job, "company")
        ));
        report.push_str(&format!("**Location**: {}\n", job_field(job, "location")));
        report.push_str(&format!("**Job ID**: {}\n\n", job_field(job, "job_id")));
        report.push_str(&format!(
            "#### Why This Role?\n{}\n\n",
            job_field(job, "reason")
        ));
        report.push_str(&format!(
            "#### Cover Letter\n{}\n\n",
            job_field(job, "cover_letter")
        ));
        report.push_str("---\n\n");
    }

    report.push_str(&format!("## Executive Summary\n{summary}\n"));

    report
}

fn full_name(profile: &CanonicalProfile) -> String {
    let parts: Vec<&str> = [profile.first_name.as_deref(), profile.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(" ")
    }
}

fn profile_location(profile: &CanonicalProfile) -> String {
    match (
        profile.address_without_country.as_deref(),
        profile.address_country_only.as_deref(),
    ) {
        (Some(city), Some(country)) => format!("{city}, {country}"),
        (Some(part), None) | (None, Some(part)) => part.to_string(),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

fn text_or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

fn job_field<'a>(job: &'a EnrichedJob, key: &str) -> &'a str {
    job.text_field(key).unwrap_or(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{json, Map, Value};

    fn fixture_profile() -> CanonicalProfile {
        CanonicalProfile {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            headline: Some("Analyst & Metaphysician".to_string()),
            address_without_country: Some("London".to_string()),
            address_country_only: Some("United Kingdom".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/ada".to_string()),
            ..Default::default()
        }
    }

    fn enriched(fields: Value) -> EnrichedJob {
        let map: Map<String, Value> = fields.as_object().unwrap().clone();
        EnrichedJob(map)
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_report_contains_every_title_as_bullet_in_order() {
        let titles = vec![
            "Data Engineer".to_string(),
            "ML Engineer".to_string(),
            "Platform Engineer".to_string(),
        ];
        let report = render_report(&fixture_profile(), &titles, &[], "s", fixed_time());

        let first = report.find("- Data Engineer").unwrap();
        let second = report.find("- ML Engineer").unwrap();
        let third = report.find("- Platform Engineer").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_report_contains_every_job_id_in_order() {
        let jobs = vec![
            enriched(json!({"job_id": "b-2", "title": "Second pick"})),
            enriched(json!({"job_id": "a-1", "title": "First pick"})),
        ];
        let report = render_report(&fixture_profile(), &[], &jobs, "s", fixed_time());

        let first = report.find("**Job ID**: b-2").unwrap();
        let second = report.find("**Job ID**: a-1").unwrap();
        assert!(first < second, "job blocks must keep input order");
    }

    #[test]
    fn test_missing_job_fields_render_as_placeholder() {
        let jobs = vec![enriched(json!({"reason": "r", "cover_letter": "c"}))];
        let report = render_report(&fixture_profile(), &[], &jobs, "s", fixed_time());

        assert!(report.contains("### N/A at N/A"));
        assert!(report.contains("**Job ID**: N/A"));
        assert!(report.contains("#### Why This Role?\nr\n"));
        assert!(report.contains("#### Cover Letter\nc\n"));
    }

    #[test]
    fn test_header_renders_identity_and_timestamp() {
        let report = render_report(&fixture_profile(), &[], &[], "s", fixed_time());

        assert!(report.starts_with("# Job Search Report for Ada Lovelace\n"));
        assert!(report.contains("Generated on 2025-06-01 12:30:00"));
        assert!(report.contains("- **Location**: London, United Kingdom"));
        assert!(report.contains("- **LinkedIn URL**: https://www.linkedin.com/in/ada"));
    }

    #[test]
    fn test_empty_profile_renders_placeholders_not_panics() {
        let report = render_report(&CanonicalProfile::default(), &[], &[], "done", fixed_time());

        assert!(report.starts_with("# Job Search Report for N/A\n"));
        assert!(report.contains("- **Current Headline**: N/A"));
        assert!(report.contains("- **Location**: N/A"));
        assert!(report.ends_with("## Executive Summary\ndone\n"));
    }

    #[test]
    fn test_job_blocks_end_with_separating_rule() {
        let jobs = vec![enriched(json!({"job_id": "1"}))];
        let report = render_report(&fixture_profile(), &[], &jobs, "s", fixed_time());
        assert!(report.contains("---\n"));
    }
}

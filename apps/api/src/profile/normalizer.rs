//! Profile Normalizer — flattens the scraper's nested payload into a
//! `CanonicalProfile`.
//!
//! The raw record is loosely typed and changes shape between scraper versions,
//! so nothing here indexes into it directly: every access goes through the
//! key-path accessor and tolerates missing or renamed fields by yielding
//! absent values. `normalize` never fails.

use serde_json::Value;

use crate::profile::models::{CanonicalProfile, SectionEntry};

/// Walks a key path through nested JSON objects, returning `None` the moment
/// a segment is missing or the current value is not an object.
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

fn get_string(value: &Value, key: &str) -> Option<String> {
    get_path(value, &[key])?.as_str().map(str::to_string)
}

/// Converts a raw scraped-profile record into the canonical flat document.
///
/// An empty or non-object input produces the empty profile, not an error —
/// a failed profile fetch degrades the run, it does not abort it.
pub fn normalize(raw: &Value) -> CanonicalProfile {
    CanonicalProfile {
        first_name: get_string(raw, "firstName"),
        last_name: get_string(raw, "lastName"),
        headline: get_string(raw, "headline"),
        address_country_only: get_string(raw, "addressCountryOnly"),
        address_without_country: get_string(raw, "addressWithoutCountry"),
        about: get_string(raw, "about"),
        experiences: simplify_section(raw, "experiences"),
        educations: simplify_section(raw, "educations"),
        license_and_certificates: simplify_section(raw, "licenseAndCertificates"),
        honors_and_awards: simplify_section(raw, "honorsAndAwards"),
        languages: simplify_section(raw, "languages"),
        volunteer_and_awards: simplify_section(raw, "volunteerAndAwards"),
        projects: simplify_section(raw, "projects"),
        publications: simplify_section(raw, "publications"),
        skills: simplify_skills(raw),
        linkedin_url: get_string(raw, "linkedinUrl"),
    }
}

/// Simplifies one repeated section, preserving entry order.
fn simplify_section(raw: &Value, key: &str) -> Vec<SectionEntry> {
    let entries = match get_path(raw, &[key]).and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .map(|entry| SectionEntry {
            title: get_string(entry, "title"),
            subtitle: get_string(entry, "subtitle"),
            caption: get_string(entry, "caption"),
            description: first_text_description(entry),
        })
        .collect()
}

/// Scans an entry's sub-components for description fragments and returns the
/// text of the first fragment typed `"textComponent"`.
///
/// First-match-wins across the WHOLE entry: once a text-typed fragment is
/// found, scanning stops even if its `text` field is absent. Fragments are
/// never concatenated.
fn first_text_description(entry: &Value) -> Option<String> {
    let sub_components = get_path(entry, &["subComponents"])?.as_array()?;

    for sub in sub_components {
        let fragments = match get_path(sub, &["description"]).and_then(Value::as_array) {
            Some(fragments) => fragments,
            None => continue,
        };

        if let Some(fragment) = fragments
            .iter()
            .find(|f| get_path(f, &["type"]).and_then(Value::as_str) == Some("textComponent"))
        {
            return get_path(fragment, &["text"])
                .and_then(Value::as_str)
                .map(str::to_string);
        }
    }

    None
}

/// Reduces skill objects to their title strings, dropping any without one.
fn simplify_skills(raw: &Value) -> Vec<String> {
    get_path(raw, &["skills"])
        .and_then(Value::as_array)
        .map(|skills| {
            skills
                .iter()
                .filter_map(|skill| get_string(skill, "title"))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_of_empty_record_is_empty_profile() {
        assert_eq!(normalize(&json!({})), CanonicalProfile::default());
        assert_eq!(normalize(&Value::Null), CanonicalProfile::default());
    }

    #[test]
    fn test_normalize_copies_identity_fields() {
        let raw = json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "headline": "Analyst",
            "addressCountryOnly": "United Kingdom",
            "addressWithoutCountry": "London",
            "about": "First programmer.",
            "linkedinUrl": "https://www.linkedin.com/in/ada"
        });
        let profile = normalize(&raw);
        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.last_name.as_deref(), Some("Lovelace"));
        assert_eq!(profile.headline.as_deref(), Some("Analyst"));
        assert_eq!(profile.address_country_only.as_deref(), Some("United Kingdom"));
        assert_eq!(profile.address_without_country.as_deref(), Some("London"));
        assert_eq!(
            profile.linkedin_url.as_deref(),
            Some("https://www.linkedin.com/in/ada")
        );
    }

    #[test]
    fn test_section_entries_preserve_source_order() {
        let raw = json!({
            "experiences": [
                {"title": "First"},
                {"title": "Second"},
                {"title": "Third"}
            ]
        });
        let profile = normalize(&raw);
        let titles: Vec<_> = profile
            .experiences
            .iter()
            .map(|e| e.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_description_takes_first_text_typed_fragment_only() {
        let raw = json!({
            "experiences": [{
                "title": "Engineer",
                "subComponents": [{
                    "description": [
                        {"type": "other"},
                        {"type": "textComponent", "text": "A"},
                        {"type": "textComponent", "text": "B"}
                    ]
                }]
            }]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.experiences[0].description.as_deref(), Some("A"));
    }

    #[test]
    fn test_description_scan_continues_into_later_sub_components() {
        // first sub-component has no text-typed fragment at all
        let raw = json!({
            "projects": [{
                "title": "Compiler",
                "subComponents": [
                    {"description": [{"type": "mediaComponent"}]},
                    {"description": [{"type": "textComponent", "text": "Built it"}]}
                ]
            }]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.projects[0].description.as_deref(), Some("Built it"));
    }

    #[test]
    fn test_entry_without_sub_components_has_no_description() {
        let raw = json!({
            "languages": [{"title": "French", "caption": "Professional"}]
        });
        let profile = normalize(&raw);
        assert_eq!(profile.languages[0].title.as_deref(), Some("French"));
        assert_eq!(profile.languages[0].caption.as_deref(), Some("Professional"));
        assert!(profile.languages[0].subtitle.is_none());
        assert!(profile.languages[0].description.is_none());
    }

    #[test]
    fn test_skills_reduce_to_titles_and_drop_untitled() {
        let raw = json!({
            "skills": [
                {"title": "Rust"},
                {"endorsements": 3},
                {"title": "SQL"}
            ]
        });
        assert_eq!(normalize(&raw).skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_malformed_sections_are_tolerated() {
        // scalar where an array is expected, and scalar entries inside arrays
        let raw = json!({
            "experiences": "not-an-array",
            "educations": [42, {"title": "MIT"}]
        });
        let profile = normalize(&raw);
        assert!(profile.experiences.is_empty());
        assert_eq!(profile.educations.len(), 2);
        assert_eq!(profile.educations[0], SectionEntry::default());
        assert_eq!(profile.educations[1].title.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_get_path_walks_nested_objects() {
        let value = json!({"a": {"b": {"c": 7}}});
        assert_eq!(get_path(&value, &["a", "b", "c"]), Some(&json!(7)));
        assert_eq!(get_path(&value, &["a", "missing"]), None);
        assert_eq!(get_path(&value, &["a", "b", "c", "d"]), None);
    }
}

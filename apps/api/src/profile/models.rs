//! Canonical profile — the flat document every downstream step consumes.
//!
//! Field names serialize in the upstream scraper's camelCase so the persisted
//! profile and the LLM context match what the scraping service emits.

use serde::{Deserialize, Serialize};

/// A simplified entry within one profile section (experience, education, …).
///
/// Absent fields are omitted from JSON entirely — never serialized as empty
/// strings or null. At most one `description` per entry (first text fragment).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Normalized, flat representation of a person's professional background.
/// Built once per run by the normalizer, persisted to the KV store, then
/// treated as read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country_only: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_without_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    pub experiences: Vec<SectionEntry>,
    pub educations: Vec<SectionEntry>,
    pub license_and_certificates: Vec<SectionEntry>,
    pub honors_and_awards: Vec<SectionEntry>,
    pub languages: Vec<SectionEntry>,
    pub volunteer_and_awards: Vec<SectionEntry>,
    pub projects: Vec<SectionEntry>,
    pub publications: Vec<SectionEntry>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
}

impl CanonicalProfile {
    /// Location string used for job searches: "city, country" when both parts
    /// are present, country alone otherwise, "United States" as the final
    /// fallback.
    pub fn search_location(&self) -> String {
        match (&self.address_without_country, &self.address_country_only) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => "United States".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_with_camel_case_keys() {
        let profile = CanonicalProfile {
            first_name: Some("Ada".to_string()),
            linkedin_url: Some("https://www.linkedin.com/in/ada".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["linkedinUrl"], "https://www.linkedin.com/in/ada");
        assert!(json.get("licenseAndCertificates").is_some());
    }

    #[test]
    fn test_absent_entry_fields_are_omitted_from_json() {
        let entry = SectionEntry {
            title: Some("Engineer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["title"], "Engineer");
        assert!(json.get("subtitle").is_none());
        assert!(json.get("caption").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_search_location_prefers_city_and_country() {
        let profile = CanonicalProfile {
            address_without_country: Some("Berlin".to_string()),
            address_country_only: Some("Germany".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.search_location(), "Berlin, Germany");
    }

    #[test]
    fn test_search_location_falls_back_to_country() {
        let profile = CanonicalProfile {
            address_country_only: Some("Germany".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.search_location(), "Germany");
    }

    #[test]
    fn test_search_location_defaults_when_profile_has_no_address() {
        assert_eq!(
            CanonicalProfile::default().search_location(),
            "United States"
        );
    }
}

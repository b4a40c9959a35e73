//! Profile-scraping collaborator.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::scrape::ActorClient;

/// Actor that scrapes a single LinkedIn profile into a dataset record.
const PROFILE_ACTOR_ID: &str = "dev_fusion~linkedin-profile-scraper";

/// Fetches zero-or-one raw profile records for a profile URL.
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// `None` means the fetch failed or returned nothing — the caller
    /// continues with an empty profile rather than aborting.
    async fn fetch(&self, profile_url: &str) -> Option<Value>;
}

pub struct ApifyProfileFetcher {
    actor: ActorClient,
}

impl ApifyProfileFetcher {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            actor: ActorClient::new(base_url, token),
        }
    }
}

fn run_input(profile_url: &str) -> Value {
    json!({ "profileUrls": [profile_url] })
}

#[async_trait]
impl ProfileFetcher for ApifyProfileFetcher {
    async fn fetch(&self, profile_url: &str) -> Option<Value> {
        info!("Fetching profile details for {profile_url}");

        let items = match self
            .actor
            .run_sync(PROFILE_ACTOR_ID, &run_input(profile_url))
            .await
        {
            Ok(items) => items,
            Err(e) => {
                warn!("Profile scrape failed for {profile_url}: {e:#}");
                return None;
            }
        };

        if items.is_empty() {
            warn!("Profile scrape returned no records for {profile_url}");
            return None;
        }

        // A single URL is submitted, so only the first record is used.
        items.into_iter().next()
    }
}

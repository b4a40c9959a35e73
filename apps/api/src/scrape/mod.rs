//! Scraping collaborators — thin clients over the actor-run API of the
//! scraping platform.
//!
//! Both collaborators are deliberately forgiving: a scrape that fails or
//! times out degrades to an empty result so the pipeline can treat "nothing
//! found" as a normal state. Errors never cross these trait boundaries.

pub mod jobs;
pub mod profile;

use anyhow::Result;
use serde_json::Value;

pub use jobs::{ApifyJobSearcher, JobSearcher};
pub use profile::{ApifyProfileFetcher, ProfileFetcher};

/// Per-call timeout for scraper runs. Expiry is treated like any other
/// failure of the call.
const SCRAPE_TIMEOUT_SECS: u64 = 90;

/// Shared plumbing for synchronous actor runs: POSTs the run input and
/// returns the run's dataset items.
#[derive(Clone)]
pub(crate) struct ActorClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ActorClient {
    pub(crate) fn new(base_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(SCRAPE_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            token,
        }
    }

    pub(crate) async fn run_sync(&self, actor_id: &str, input: &Value) -> Result<Vec<Value>> {
        let url = format!(
            "{}/v2/acts/{}/run-sync-get-dataset-items",
            self.base_url, actor_id
        );

        let response = self
            .client
            .post(&url)
            .query(&[("token", self.token.as_str())])
            .json(input)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("actor {actor_id} returned {status}: {body}");
        }

        let items: Vec<Value> = response.json().await?;
        Ok(items)
    }
}

//! Job Search Client — listing-scraping collaborator.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::scrape::ActorClient;

/// Actor that scrapes LinkedIn job listings for a title/location query.
const JOBS_ACTOR_ID: &str = "worldunboxer~rapid-linkedin-scraper";

/// Single page of results per search; no pagination loop.
const PAGE_SIZE: u32 = 20;
const START_OFFSET: u32 = 0;

/// Fetches raw job records for a title/location query.
#[async_trait]
pub trait JobSearcher: Send + Sync {
    /// An empty vec covers both "no matches" and "search failed" — a title
    /// that finds nothing simply contributes nothing to the pool.
    async fn search(&self, job_title: &str, location: &str) -> Vec<Value>;
}

pub struct ApifyJobSearcher {
    actor: ActorClient,
}

impl ApifyJobSearcher {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            actor: ActorClient::new(base_url, token),
        }
    }
}

fn run_input(job_title: &str, location: &str) -> Value {
    json!({
        "job_title": job_title,
        "jobs_entries": PAGE_SIZE,
        "location": location,
        "start_jobs": START_OFFSET,
    })
}

#[async_trait]
impl JobSearcher for ApifyJobSearcher {
    async fn search(&self, job_title: &str, location: &str) -> Vec<Value> {
        info!("Searching jobs for '{job_title}' in '{location}'");

        match self
            .actor
            .run_sync(JOBS_ACTOR_ID, &run_input(job_title, location))
            .await
        {
            Ok(items) => {
                info!("Found {} jobs for '{job_title}'", items.len());
                items
            }
            Err(e) => {
                warn!("Job search failed for '{job_title}': {e:#}");
                Vec::new()
            }
        }
    }
}

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::metering::UsageMeter;
use crate::scrape::{JobSearcher, ProfileFetcher};
use crate::storage::KvStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Collaborators are constructed once at startup and passed
/// down — never reconstructed ad hoc.
#[derive(Clone)]
pub struct AppState {
    pub profile_fetcher: Arc<dyn ProfileFetcher>,
    pub job_searcher: Arc<dyn JobSearcher>,
    pub llm: LlmClient,
    pub kv: Arc<dyn KvStore>,
    pub meter: Arc<dyn UsageMeter>,
    pub config: Config,
}

mod config;
mod errors;
mod llm_client;
mod metering;
mod pipeline;
mod profile;
mod routes;
mod scrape;
mod state;
mod storage;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::metering::{DisabledMeter, HttpUsageMeter, UsageMeter};
use crate::routes::build_router;
use crate::scrape::{ApifyJobSearcher, ApifyProfileFetcher};
use crate::state::AppState;
use crate::storage::RedisKvStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize scraping collaborators
    let profile_fetcher: Arc<dyn scrape::ProfileFetcher> = Arc::new(ApifyProfileFetcher::new(
        config.apify_base_url.clone(),
        config.apify_token.clone(),
    ));
    let job_searcher: Arc<dyn scrape::JobSearcher> = Arc::new(ApifyJobSearcher::new(
        config.apify_base_url.clone(),
        config.apify_token.clone(),
    ));
    info!("Scrape clients initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize Redis-backed KV store
    let redis = redis::Client::open(config.redis_url.clone())?;
    let kv: Arc<dyn storage::KvStore> = Arc::new(RedisKvStore::new(redis));
    info!("KV store initialized");

    // Initialize usage metering (disabled when no collector is configured)
    let meter: Arc<dyn UsageMeter> = match &config.metering_url {
        Some(url) => Arc::new(HttpUsageMeter::new(url.clone())),
        None => {
            info!("Metering disabled (METERING_URL not set)");
            Arc::new(DisabledMeter)
        }
    };

    // Build app state
    let state = AppState {
        profile_fetcher,
        job_searcher,
        llm,
        kv,
        meter,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

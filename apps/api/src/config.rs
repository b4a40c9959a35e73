use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_token: String,
    pub apify_base_url: String,
    pub anthropic_api_key: String,
    pub redis_url: String,
    /// Endpoint of the usage-metering collector. Metering is disabled when unset.
    pub metering_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            apify_token: require_env("APIFY_TOKEN")?,
            apify_base_url: std::env::var("APIFY_BASE_URL")
                .unwrap_or_else(|_| "https://api.apify.com".to_string()),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            redis_url: require_env("REDIS_URL")?,
            metering_url: std::env::var("METERING_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

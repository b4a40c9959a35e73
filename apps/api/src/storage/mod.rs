//! Key-value persistence collaborator — pipeline checkpoint writes.
//!
//! The pipeline persists three artifacts per run: the canonical profile, the
//! enriched selections, and the rendered report. Write failures propagate;
//! a checkpoint that cannot be recorded aborts the run.

use anyhow::Result;
use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::debug;

pub const KEY_LINKEDIN_PROFILE: &str = "linkedin_profile";
pub const KEY_SELECTED_JOBS: &str = "selected_jobs_with_details";
pub const KEY_MARKDOWN_REPORT: &str = "markdown_report";

#[async_trait]
pub trait KvStore: Send + Sync {
    async fn set(&self, key: &str, value: &Value) -> Result<()>;
}

/// Redis-backed store. Values are stored as JSON strings.
pub struct RedisKvStore {
    client: redis::Client,
}

impl RedisKvStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        let payload = serde_json::to_string(value)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key, payload).await?;
        debug!("KV checkpoint written: {key}");
        Ok(())
    }
}

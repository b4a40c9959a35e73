//! Usage-metering collaborator — advisory cost events.
//!
//! Charges are fire-and-forget: a collector outage must never affect the
//! pipeline, so every failure is logged and swallowed here.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

/// One flat unit charged when a run starts.
pub const EVENT_INIT: &str = "init";
/// Charged per whole 1000-token unit consumed by an LLM call, rounded up.
pub const EVENT_LLM_TOKENS: &str = "1k-llm-tokens";
/// Charged per record returned by a successful scrape.
pub const EVENT_TOOL_RESULT: &str = "tool-result";

const CHARGE_TIMEOUT_SECS: u64 = 5;

/// Converts an LLM call's total token count into billed units.
pub fn billed_token_units(total_tokens: u32) -> u64 {
    (total_tokens as u64).div_ceil(1000)
}

#[async_trait]
pub trait UsageMeter: Send + Sync {
    /// Records a cost event. Infallible by contract — implementations handle
    /// their own errors.
    async fn charge(&self, event_name: &str, count: u64);
}

#[derive(Debug, Serialize)]
struct ChargeRequest<'a> {
    event_name: &'a str,
    count: u64,
}

/// POSTs charge events to the metering collector.
pub struct HttpUsageMeter {
    client: reqwest::Client,
    url: String,
}

impl HttpUsageMeter {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(CHARGE_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl UsageMeter for HttpUsageMeter {
    async fn charge(&self, event_name: &str, count: u64) {
        if count == 0 {
            return;
        }

        let request = ChargeRequest { event_name, count };
        match self.client.post(&self.url).json(&request).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Charged {count} x '{event_name}'");
            }
            Ok(response) => {
                warn!(
                    "Metering collector rejected '{event_name}' x {count}: {}",
                    response.status()
                );
            }
            Err(e) => {
                warn!("Metering call failed for '{event_name}' x {count}: {e}");
            }
        }
    }
}

/// Used when no collector is configured — charges are logged only.
pub struct DisabledMeter;

#[async_trait]
impl UsageMeter for DisabledMeter {
    async fn charge(&self, event_name: &str, count: u64) {
        debug!("Metering disabled, dropping charge {count} x '{event_name}'");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billed_units_round_up_to_next_thousand() {
        assert_eq!(billed_token_units(2500), 3);
        assert_eq!(billed_token_units(1000), 1);
        assert_eq!(billed_token_units(1001), 2);
        assert_eq!(billed_token_units(999), 1);
    }

    #[test]
    fn test_zero_tokens_bill_zero_units() {
        assert_eq!(billed_token_units(0), 0);
    }
}

//! Fallback gateway
//!
//! Walks an ordered model chain, one attempt at a time: first success wins,
//! every failure is recorded, and only exhaustion of the whole chain is
//! surfaced to the caller. No backoff, no racing; attempts are strictly
//! sequential.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::attempt_log::{AttemptSink, FailureRecord};
use crate::client::ChatClient;
use crate::error::GatewayError;

/// Models tried in order when the caller does not configure a chain.
/// Free-tier first, paid fallback last.
pub const DEFAULT_MODEL_CHAIN: [&str; 4] = [
    "google/gemini-2.0-flash-exp:free",
    "meta-llama/llama-3.3-70b-instruct:free",
    "mistralai/mistral-7b-instruct:free",
    "openai/gpt-4o-mini",
];

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Provider base URL, e.g. `https://openrouter.ai/api/v1`.
    pub base_url: String,
    /// Bearer key; `None` for keyless local endpoints.
    pub api_key: Option<String>,
    /// Ordered fallback chain, consulted top to bottom.
    pub models: Vec<String>,
    /// Output-token cap applied to every attempt.
    pub max_output_tokens: u32,
    /// Per-request HTTP timeout.
    pub timeout_seconds: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
            models: DEFAULT_MODEL_CHAIN.iter().map(|m| m.to_string()).collect(),
            max_output_tokens: 1024,
            timeout_seconds: 60,
        }
    }
}

/// Sequential-fallback completion gateway. Cheap to clone; the HTTP
/// client and the sink are shared.
#[derive(Clone)]
pub struct LlmGateway {
    client: ChatClient,
    models: Arc<[String]>,
    sink: Arc<dyn AttemptSink>,
}

impl LlmGateway {
    pub fn new(config: GatewayConfig, sink: Arc<dyn AttemptSink>) -> Result<Self, GatewayError> {
        let client = ChatClient::new(
            &config.base_url,
            config.api_key,
            config.max_output_tokens,
            config.timeout_seconds,
        )?;
        Ok(Self {
            client,
            models: config.models.into(),
            sink,
        })
    }

    /// The configured fallback chain, in attempt order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Run `prompt` through the chain and return the first successful
    /// completion. Fails with `GatewayError::Exhausted` once every model
    /// has been attempted; per-model failures live only in the sink.
    pub async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let request_id = Uuid::new_v4();

        for (attempt, model) in self.models.iter().enumerate() {
            match self.client.complete(model, prompt).await {
                Ok(text) => {
                    info!(%request_id, model = %model, attempt, "chat completion succeeded");
                    return Ok(text);
                }
                Err(e) => {
                    warn!(%request_id, model = %model, attempt, error = %e, "model attempt failed");
                    self.sink.record(&FailureRecord {
                        timestamp: Utc::now(),
                        request_id,
                        model: model.clone(),
                        attempt,
                        reason: e.to_string(),
                    });
                }
            }
        }

        error!(%request_id, attempted = self.models.len(), "fallback chain exhausted");
        Err(GatewayError::Exhausted {
            attempted: self.models.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attempt_log::MemoryAttemptSink;

    #[test]
    fn test_default_config_uses_free_tier_chain() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.models.len(), 4);
        assert_eq!(config.models[0], "google/gemini-2.0-flash-exp:free");
        assert_eq!(config.models[3], "openai/gpt-4o-mini");
        assert_eq!(config.max_output_tokens, 1024);
    }

    #[tokio::test]
    async fn test_empty_chain_is_immediately_exhausted() {
        let config = GatewayConfig {
            models: Vec::new(),
            ..GatewayConfig::default()
        };
        let sink = Arc::new(MemoryAttemptSink::new());
        let gateway = LlmGateway::new(config, sink.clone()).unwrap();

        let err = gateway.complete("hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::Exhausted { attempted: 0 }));
        assert!(sink.records().is_empty());
    }
}

//! Chat-completion HTTP client
//!
//! One round-trip against an OpenAI-style `/chat/completions` endpoint.
//! Wire types are private to this module; callers only see prompt in,
//! text out. The output-token cap rides on every request to bound cost.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{AttemptError, GatewayError};

/// Thin wrapper over `reqwest::Client`, cheap to clone.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl ChatClient {
    /// Build a client for `<base_url>/chat/completions`.
    ///
    /// `api_key` is `None` for keyless local endpoints; when present it is
    /// sent as `Authorization: Bearer <key>` on every request.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        max_tokens: u32,
        timeout_seconds: u64,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            max_tokens,
        })
    }

    /// Send `prompt` as a single user message against one named model.
    ///
    /// A non-2xx status, a transport failure, or a response without usable
    /// content all come back as `AttemptError` so the caller can advance
    /// its fallback chain.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String, AttemptError> {
        let payload = ChatCompletionRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
        };

        debug!(model, prompt_len = prompt.len(), "sending chat completion request");

        let mut request = self.http.post(&self.endpoint).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            error!(model, error = %e, "chat completion transport failure");
            AttemptError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            error!(model, status = status.as_u16(), "chat completion returned HTTP error");
            return Err(AttemptError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|_| AttemptError::Malformed)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AttemptError::Malformed)
    }
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

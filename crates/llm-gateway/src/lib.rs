//! LLM Gateway
//!
//! Sequential model-fallback wrapper for OpenAI-style chat completions:
//! - ordered model chain, first success wins
//! - failed attempts recorded to an append-only sink
//! - uniform output-token cap on every attempt
//!
//! Callers see either the winning completion or a single terminal
//! exhaustion error; per-model failure detail lives in the attempt log.

mod attempt_log;
mod client;
mod error;
mod gateway;

pub use attempt_log::{AttemptSink, FailureRecord, FileAttemptSink, MemoryAttemptSink};
pub use client::ChatClient;
pub use error::{AttemptError, GatewayError};
pub use gateway::{GatewayConfig, LlmGateway, DEFAULT_MODEL_CHAIN};

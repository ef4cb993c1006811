//! Gateway error types

use thiserror::Error;

/// One backend attempt failing. Recorded to the attempt log, never
/// surfaced to callers directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("empty or missing content in response")]
    Malformed,
}

/// Terminal gateway failures, surfaced to callers.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("all models exhausted after {attempted} attempts")]
    Exhausted { attempted: usize },
}

//! LLM Gateway port
//!
//! Defines the interface for sending a single prompt to an LLM provider.
//! Implementations (adapters) live in the infrastructure layer and must
//! map every transport fault to a [`GatewayError`] — nothing escapes as
//! a panic or an unclassified error.

use async_trait::async_trait;
use thiserror::Error;
use vulnmend_domain::Model;

/// Errors that can occur during a gateway invocation
///
/// These are returned as data, not raised: the orchestrator inspects them
/// to decide whether to continue (e.g. abandon a two-step plan after the
/// first exchange fails) and reports the message to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Provider credential is not configured. Detected before any
    /// network call is attempted.
    #[error("{0} environment variable not set.")]
    MissingApiKey(String),

    /// Provider answered with a non-2xx status.
    #[error("Error while retrieving API data. Status code: {0}")]
    HttpStatus(u16),

    /// The bounded request timeout expired.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Transport-level fault: DNS, connection reset, TLS, and friends.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not JSON or did not have the expected shape.
    #[error("Failed to parse API response as JSON")]
    Parse,

    /// Model id is recognized but no provider backs it yet.
    #[error("Model not yet supported: {0}")]
    NotImplemented(Model),

    /// Catch-all for faults the adapter could not classify.
    #[error("Unexpected error: {0}")]
    Other(String),
}

/// Gateway for a single-turn LLM exchange
///
/// `invoke` sends one user-role message and returns the assistant's reply
/// text. The call blocks (asynchronously) until the provider answers or
/// the adapter's configured timeout expires.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn invoke(&self, model: Model, prompt: &str) -> Result<String, GatewayError>;
}

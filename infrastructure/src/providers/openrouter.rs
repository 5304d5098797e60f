//! OpenRouter chat-completions gateway
//!
//! Sends a single user-role message to OpenRouter's chat-completions
//! endpoint and maps every transport outcome to a [`GatewayError`]. No
//! fault escapes this adapter unclassified: timeouts, connection errors,
//! non-2xx statuses, and unparseable bodies all come back as data.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use vulnmend_application::ports::llm_gateway::{GatewayError, LlmGateway};
use vulnmend_domain::Model;

/// Production chat-completions endpoint.
pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 200;

/// How a domain [`Model`] is served: the provider-side model slug and the
/// environment variable holding its credential.
struct ProviderRoute {
    slug: &'static str,
    api_key_env: &'static str,
}

fn route(model: Model) -> Result<ProviderRoute, GatewayError> {
    match model {
        Model::DeepseekV31 => Ok(ProviderRoute {
            slug: "deepseek/deepseek-chat-v3.1:free",
            api_key_env: "DEEPSEEK_API_KEY",
        }),
        // Recognized but not yet backed by a provider. Surfaced as an
        // explicit failure so the caller never sees a silent no-result.
        Model::GeminiFlash25 => Err(GatewayError::NotImplemented(model)),
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// OpenRouter-backed implementation of [`LlmGateway`]
pub struct OpenRouterGateway {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl OpenRouterGateway {
    pub fn new() -> Self {
        Self::with_base_url(OPENROUTER_API_URL)
    }

    /// Create a gateway pointing at a custom endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn api_key(&self, route: &ProviderRoute) -> Result<String, GatewayError> {
        std::env::var(route.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GatewayError::MissingApiKey(route.api_key_env.to_string()))
    }
}

impl Default for OpenRouterGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmGateway for OpenRouterGateway {
    async fn invoke(&self, model: Model, prompt: &str) -> Result<String, GatewayError> {
        let route = route(model)?;
        // Credential check happens before any network traffic.
        let api_key = self.api_key(&route)?;

        let body = serde_json::json!({
            "model": route.slug,
            "messages": [{"role": "user", "content": prompt}],
        });

        debug!(
            "POST {} (model={}, timeout={}s)",
            self.base_url, route.slug, self.timeout_secs
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(self.timeout_secs)
                } else if e.is_connect() || e.is_request() {
                    GatewayError::Network(e.to_string())
                } else {
                    GatewayError::Other(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus(status.as_u16()));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(self.timeout_secs)
            } else {
                GatewayError::Parse
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GatewayError::Parse)
    }
}

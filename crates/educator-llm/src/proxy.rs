//! # Completion Proxy
//!
//! Builds and sends the outbound request to the completion provider and
//! maps both success and failure shapes into the normalized
//! [`ChatResponse`] envelope.
//!
//! The provider speaks the OpenAI-compatible chat completions format. The
//! response body is always read as raw text first and parsed afterwards,
//! so a non-JSON body can be surfaced to the caller for diagnostics
//! instead of vanishing into a decode error.
//!
//! One request, one POST: no retries, no streaming. A failure at any step
//! is terminal for the current call.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use educator_core::chat::{ChatMessage, ChatRequest, ChatResponse};

use crate::inject::inject_context;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Default provider endpoint (OpenAI-compatible chat completions).
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1/chat/completions";

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

/// Reply substituted when the provider returns no content.
pub const FALLBACK_REPLY: &str = "No response could be generated.";

/// Default bound on the outbound call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Result type alias for proxy operations.
pub type ProxyResult<T> = Result<T, ProxyError>;

/// Errors that can occur while proxying a chat completion.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming request failed validation (user-caused).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the request.
        message: String,
    },

    /// The provider returned a body that is not JSON.
    #[error("failed to parse the provider response")]
    MalformedResponse {
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The provider returned a structured error.
    #[error("provider error ({status}): {message}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream-reported message.
        message: String,
        /// Provider-specific error code, when reported.
        code: Option<String>,
    },

    /// Network-level failure reaching the provider (includes timeouts).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any other unexpected failure.
    #[error("internal error: {message}")]
    Internal {
        /// Error description.
        message: String,
    },
}

impl ProxyError {
    /// Error category string for log emission.
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidInput { .. } => "input",
            Self::MalformedResponse { .. } => "parse",
            Self::Upstream { .. } => "upstream",
            Self::Transport(_) => "transport",
            Self::Internal { .. } => "internal",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Explicit proxy configuration — no ambient process-wide lookups.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Provider endpoint URL.
    pub base_url: String,
    /// Bearer credential sent on every request.
    pub api_token: String,
    /// Model used when the request omits one.
    pub default_model: String,
    /// Bound on the outbound call; expiry surfaces as
    /// [`ProxyError::Transport`].
    pub timeout: Duration,
}

impl ProxyConfig {
    /// Config with the default endpoint, model, and timeout.
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: api_token.into(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Proxy
// ─────────────────────────────────────────────────────────────────────────────

/// Outbound payload in the provider's wire format.
#[derive(Serialize)]
struct CompletionPayload<'a> {
    model: &'a str,
    temperature: f64,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

/// Completion proxy. Holds one `reqwest::Client`, reused (and safely
/// shared) across concurrent requests.
pub struct CompletionProxy {
    config: ProxyConfig,
    client: reqwest::Client,
}

impl CompletionProxy {
    /// Create a new proxy.
    #[must_use]
    pub fn new(config: ProxyConfig) -> Self {
        debug!(base_url = %config.base_url, model = %config.default_model, "completion proxy initialized");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build HTTP headers for the provider request.
    fn build_headers(&self) -> ProxyResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", self.config.api_token);
        let _ = headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|e| ProxyError::Internal {
                message: format!("invalid authorization header: {e}"),
            })?,
        );
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Validate, inject, forward, and normalize one chat completion.
    ///
    /// The summary is merged into the leading system message before the
    /// request goes out; see [`crate::inject::inject_context`] for the
    /// injection rule.
    pub async fn complete(&self, request: &ChatRequest, summary: &str) -> ProxyResult<ChatResponse> {
        if request.messages.is_empty() {
            return Err(ProxyError::InvalidInput {
                message: "a non-empty messages array is required".into(),
            });
        }

        let messages = inject_context(&request.messages, summary);
        let requested_model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);
        let payload = CompletionPayload {
            model: requested_model,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            messages: &messages,
        };

        debug!(
            model = requested_model,
            message_count = messages.len(),
            "forwarding chat completion"
        );

        let response = self
            .client
            .post(&self.config.base_url)
            .headers(self.build_headers()?)
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let Ok(data) = serde_json::from_str::<Value>(&body) else {
            warn!(status = status.as_u16(), "provider returned a non-JSON body");
            return Err(ProxyError::MalformedResponse { body });
        };

        if !status.is_success() {
            let (message, code) = parse_upstream_error(&data);
            warn!(status = status.as_u16(), message, "provider reported an error");
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                message,
                code,
            });
        }

        let content = data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_REPLY);
        let model = data
            .get("model")
            .and_then(Value::as_str)
            .unwrap_or(requested_model);
        let usage = data
            .get("usage")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        Ok(ChatResponse::single(content, model, usage))
    }
}

/// Extract the message and code from a provider error body.
///
/// Expects `{"error": {"message": …, "code": …}}`; falls back to a fixed
/// message when the shape differs.
fn parse_upstream_error(data: &Value) -> (String, Option<String>) {
    let error = &data["error"];
    let message = error["message"]
        .as_str()
        .unwrap_or("the completion provider reported an error")
        .to_string();
    let code = error["code"].as_str().map(String::from);
    (message, code)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Chat wire types.
//!
//! An incoming [`ChatRequest`] carries an ordered message sequence plus
//! optional sampling knobs. The backend always answers with the normalized
//! [`ChatResponse`] envelope regardless of the upstream provider's native
//! response shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Message role. The leading `system` message, when present, is the only
/// injection point for record context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// End-user message.
    User,
    /// Model reply.
    Assistant,
}

/// A single conversation message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: Role,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Incoming chat request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Ordered message sequence. Must be non-empty; validated by the proxy
    /// before any outbound call.
    pub messages: Vec<ChatMessage>,
    /// Model override. Falls back to the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Output token cap.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// The assistant message inside a response choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyMessage {
    /// Always [`Role::Assistant`].
    pub role: Role,
    /// Reply text.
    pub content: String,
}

/// One completion choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The reply message.
    pub message: ReplyMessage,
}

/// Normalized response envelope returned to the backend's own caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion choices (exactly one in practice).
    pub choices: Vec<Choice>,
    /// Model that produced the reply — upstream-reported when available,
    /// otherwise the requested model.
    pub model: String,
    /// Upstream token usage, or `{}` when the provider omitted it.
    pub usage: Value,
}

impl ChatResponse {
    /// Build the envelope around a single assistant reply.
    #[must_use]
    pub fn single(content: impl Into<String>, model: impl Into<String>, usage: Value) -> Self {
        Self {
            choices: vec![Choice {
                message: ReplyMessage {
                    role: Role::Assistant,
                    content: content.into(),
                },
            }],
            model: model.into(),
            usage,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

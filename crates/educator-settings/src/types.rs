//! Settings types with compiled defaults.

use serde::{Deserialize, Serialize};

/// Top-level settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducatorSettings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Completion provider settings.
    pub provider: ProviderSettings,
}

/// HTTP server settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
    /// Host to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path to the `SQLite` records database.
    pub database_path: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            database_path: "educator.db".into(),
        }
    }
}

/// Completion provider settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// Provider endpoint URL.
    pub base_url: String,
    /// Model used when a chat request omits one.
    pub default_model: String,
    /// Bearer credential. Usually supplied via the `HF_TOKEN` env var
    /// rather than the settings file.
    pub api_token: Option<String>,
    /// Bound on the outbound provider call, in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1/chat/completions".into(),
            default_model: "meta-llama/Llama-3.2-3B-Instruct".into(),
            api_token: None,
            timeout_secs: 60,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Client configuration types for readpal.
//!
//! `AppConfig` represents the top-level `config.toml` that controls the
//! backend endpoint, the context window size, and request timeouts.
//! All fields have sensible defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the readpal client.
///
/// Loaded from `~/.readpal/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the chatbot backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Number of trailing messages sent as backend context.
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Per-request timeout in seconds for backend calls.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_history_window() -> usize {
    8
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            history_window: default_history_window(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

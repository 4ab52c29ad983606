//! `HttpBackend` -- concrete implementation of the backend ports over
//! HTTP.
//!
//! Sends JSON POST requests to the chatbot backend's three endpoints:
//! `/api/start-conversation/`, `/api/chat/`, and `/api/save-message/`.
//! Non-2xx statuses are mapped to [`BackendError::Status`] with the
//! error body attached, transport failures to [`BackendError::Network`],
//! and body parse failures to [`BackendError::Decode`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use readpal_core::backend::{ChatBackend, MessageSink};
use readpal_types::error::BackendError;
use readpal_types::wire::{
    ChatRequest, ChatResponse, SaveMessageRequest, StartConversationRequest,
    StartConversationResponse,
};

const START_CONVERSATION_PATH: &str = "/api/start-conversation/";
const CHAT_PATH: &str = "/api/chat/";
const SAVE_MESSAGE_PATH: &str = "/api/save-message/";

/// HTTP client for the chatbot backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new backend client.
    ///
    /// `base_url` is the backend origin without a trailing slash
    /// (e.g., "http://localhost:8000").
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Override the base URL (useful for testing against a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and return the response status + text.
    async fn post_raw<Req: Serialize>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// POST a JSON body and decode a JSON response.
    async fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        body: &Req,
    ) -> Result<Resp, BackendError> {
        let text = self.post_raw(path, body).await?;
        serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }
}

impl ChatBackend for HttpBackend {
    async fn start_conversation(
        &self,
        request: &StartConversationRequest,
    ) -> Result<StartConversationResponse, BackendError> {
        self.post_json(START_CONVERSATION_PATH, request).await
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.post_json(CHAT_PATH, request).await
    }
}

impl MessageSink for HttpBackend {
    async fn save_message(&self, request: &SaveMessageRequest) -> Result<(), BackendError> {
        // Response body is ignored; only the status matters.
        self.post_raw(SAVE_MESSAGE_PATH, request).await.map(|_| ())
    }
}

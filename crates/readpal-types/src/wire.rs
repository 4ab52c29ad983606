//! Wire contract for the readpal backend HTTP surface.
//!
//! JSON request/response bodies for the three endpoints the client
//! consumes: `/api/start-conversation/`, `/api/chat/`, and
//! `/api/save-message/`. Field renames produce exactly the camelCase
//! spellings the backend expects.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, Speaker};
use crate::classify::ClassificationRecord;

/// Role of a history entry in the backend context window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryRole {
    User,
    Assistant,
}

impl From<Speaker> for HistoryRole {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::User => HistoryRole::User,
            Speaker::Agent => HistoryRole::Assistant,
        }
    }
}

/// One role-normalized turn of prior conversation sent as context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: HistoryRole,
    pub content: String,
}

impl From<&ChatMessage> for HistoryEntry {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.speaker.into(),
            content: message.text.clone(),
        }
    }
}

/// Request body for `POST /api/start-conversation/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConversationRequest {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub character: String,
    #[serde(rename = "initialMessage")]
    pub initial_message: String,
}

/// Response body for a successful start-conversation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConversationResponse {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
}

/// Request body for `POST /api/chat/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub character: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub history: Vec<HistoryEntry>,
}

/// Response body for a successful chat call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Request body for `POST /api/save-message/`.
///
/// The response body is ignored by the client; failures are logged and
/// swallowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMessageRequest {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
    pub sender: Speaker,
    pub content: String,
    pub meta: ClassificationRecord,
}

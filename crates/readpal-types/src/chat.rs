//! Chat session and message types for readpal.
//!
//! These types model the single live session: its mode, the append-only
//! message list, and the conversation handle resolved by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who produced a message.
///
/// Wire names match the storage endpoint's `sender` field:
/// `user` for the child, `bot` for the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    #[serde(rename = "bot")]
    Agent,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Agent => write!(f, "bot"),
        }
    }
}

impl FromStr for Speaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Speaker::User),
            "bot" | "agent" => Ok(Speaker::Agent),
            other => Err(format!("invalid speaker: '{other}'")),
        }
    }
}

/// A single message in the live session.
///
/// Messages are never mutated after creation; the session's message list
/// is append-only and discarded on reset. `ordinal` is the insertion
/// order starting at 0 (the greeting). `created_at` is client-assigned
/// and observational -- the backend stamps stored messages itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub ordinal: u32,
    pub created_at: DateTime<Utc>,
}

/// The session state machine's mode.
///
/// `Selecting -> NamingUser -> Chatting`, with `Selecting -> Chatting`
/// permitted directly on the generic/no-persona path, and
/// `Chatting -> Selecting` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Selecting,
    NamingUser,
    Chatting,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Selecting => write!(f, "selecting"),
            SessionMode::NamingUser => write!(f, "naming_user"),
            SessionMode::Chatting => write!(f, "chatting"),
        }
    }
}

impl Default for SessionMode {
    fn default() -> Self {
        SessionMode::Selecting
    }
}

/// Resolved conversation identity for the live session.
///
/// Set at most once per session: either the backend-issued id, or the
/// `LocalOnly` sentinel meaning chat proceeds but nothing is persisted
/// server-side. Never cleared within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationHandle {
    /// Backend conversation record exists; messages are persisted.
    Remote(String),
    /// Conversation creation failed; persistence is disabled.
    LocalOnly,
}

impl ConversationHandle {
    /// The backend conversation id, if persistence is enabled.
    pub fn id(&self) -> Option<&str> {
        match self {
            ConversationHandle::Remote(id) => Some(id),
            ConversationHandle::LocalOnly => None,
        }
    }

    pub fn is_local_only(&self) -> bool {
        matches!(self, ConversationHandle::LocalOnly)
    }
}

impl fmt::Display for ConversationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationHandle::Remote(id) => write!(f, "{id}"),
            ConversationHandle::LocalOnly => write!(f, "local-only"),
        }
    }
}

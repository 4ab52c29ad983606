use thiserror::Error;

/// Errors from backend HTTP calls.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors from session controller operations.
///
/// None of these is fatal to the session; each rejects a single
/// operation and leaves the session state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is not in chat mode")]
    NotChatting,

    #[error("a chat round is already in flight")]
    Busy,

    #[error("message is empty")]
    EmptyMessage,

    #[error("username is empty")]
    EmptyUsername,

    #[error("conversation has not been started")]
    ConversationNotStarted,

    #[error("unknown persona: '{0}'")]
    UnknownPersona(String),

    #[error("invalid mode transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

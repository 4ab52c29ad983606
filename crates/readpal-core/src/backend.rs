//! Backend port trait definitions.
//!
//! The session controller talks to the backend exclusively through these
//! traits. Implementations live in readpal-infra (`HttpBackend`); tests
//! substitute in-memory fakes. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use readpal_types::error::BackendError;
use readpal_types::wire::{
    ChatRequest, ChatResponse, SaveMessageRequest, StartConversationRequest,
    StartConversationResponse,
};

/// The chat round-trip surface of the backend.
///
/// Both calls are part of the user-facing conversation flow: a failed
/// `start_conversation` degrades the session to local-only, a failed
/// `complete` ends that round with a fallback reply.
pub trait ChatBackend: Send + Sync {
    /// Create a backend conversation record. Called exactly once per
    /// entry into chat mode, never retried.
    fn start_conversation(
        &self,
        request: &StartConversationRequest,
    ) -> impl std::future::Future<Output = Result<StartConversationResponse, BackendError>> + Send;

    /// Request a model reply for one user message plus context window.
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatResponse, BackendError>> + Send;
}

/// Best-effort sink for classified message persistence.
///
/// Calls are fire-and-forget from the controller's perspective: errors
/// are logged and swallowed, never retried, and never affect the chat
/// flow.
pub trait MessageSink: Send + Sync {
    fn save_message(
        &self,
        request: &SaveMessageRequest,
    ) -> impl std::future::Future<Output = Result<(), BackendError>> + Send;
}

//! Conversation lifecycle: backend conversation creation with graceful
//! degradation.
//!
//! `start` is invoked exactly once per entry into chat mode and never
//! retried; a session reset and re-entry runs a fresh lifecycle. On any
//! failure the session degrades to local-only -- chat stays usable,
//! server-side persistence is disabled for the rest of the session.

use tracing::{info, warn};

use readpal_types::chat::ConversationHandle;
use readpal_types::wire::StartConversationRequest;

use crate::backend::ChatBackend;

/// Name sent to the backend when no username was captured.
const ANONYMOUS_USERNAME: &str = "Anon";

/// Create the backend conversation record for a new chat session.
///
/// Returns `Remote(id)` on success and `LocalOnly` on any failure
/// (non-2xx status or network error). Failures are logged, never
/// surfaced, never retried.
pub async fn start<B: ChatBackend>(
    backend: &B,
    username: Option<&str>,
    persona_key: &str,
    greeting: &str,
) -> ConversationHandle {
    let request = StartConversationRequest {
        user_name: username.unwrap_or(ANONYMOUS_USERNAME).to_string(),
        character: persona_key.to_string(),
        initial_message: greeting.to_string(),
    };

    match backend.start_conversation(&request).await {
        Ok(response) => {
            info!(
                conversation_id = %response.conversation_id,
                persona = persona_key,
                "conversation started"
            );
            ConversationHandle::Remote(response.conversation_id)
        }
        Err(err) => {
            warn!(
                error = %err,
                persona = persona_key,
                "failed to start conversation, degrading to local-only"
            );
            ConversationHandle::LocalOnly
        }
    }
}

//! The session controller: top-level state machine of the client.
//!
//! Owns the single live session (mode, persona binding, username,
//! conversation handle, append-only message list, pending flag) and
//! composes the lifecycle, history window, and classifier. The
//! presentation layer calls its operations and reads its accessors; no
//! other component mutates session state.
//!
//! Persistence is dispatched fire-and-forget onto the tokio runtime:
//! a spawned save owns its request data, so it is a no-op against a
//! session that has since been reset.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use readpal_types::chat::{ChatMessage, ConversationHandle, SessionMode, Speaker};
use readpal_types::error::SessionError;
use readpal_types::persona::Persona;
use readpal_types::wire::{ChatRequest, SaveMessageRequest};

use crate::backend::{ChatBackend, MessageSink};
use crate::classify::classify;
use crate::history;
use crate::persona::PersonaRegistry;
use crate::session::lifecycle;

/// Reply substituted when a chat round fails.
pub const FALLBACK_REPLY: &str = "Sorry, an error occurred. Please try again.";

/// Top-level session state machine.
///
/// Generic over the backend ports so tests can substitute fakes.
pub struct SessionController<B, S> {
    backend: Arc<B>,
    sink: Arc<S>,
    registry: PersonaRegistry,
    history_window: usize,

    mode: SessionMode,
    username: Option<String>,
    persona: Option<Persona>,
    conversation: Option<ConversationHandle>,
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl<B, S> SessionController<B, S>
where
    B: ChatBackend,
    S: MessageSink + 'static,
{
    /// Create a controller in `Selecting` mode with an empty session.
    pub fn new(
        backend: Arc<B>,
        sink: Arc<S>,
        registry: PersonaRegistry,
        history_window: usize,
    ) -> Self {
        Self {
            backend,
            sink,
            registry,
            history_window,
            mode: SessionMode::Selecting,
            username: None,
            persona: None,
            conversation: None,
            messages: Vec::new(),
            pending: false,
        }
    }

    // --- Accessors (read-only view for the presentation layer) ---

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub fn conversation(&self) -> Option<&ConversationHandle> {
        self.conversation.as_ref()
    }

    /// The full session transcript, greeting first. Append-only.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// Whether a submission would currently be accepted.
    pub fn is_ready(&self) -> bool {
        self.mode == SessionMode::Chatting && !self.pending && self.conversation.is_some()
    }

    // --- Mode transitions ---

    /// `Selecting -> NamingUser` (personalized path).
    pub fn begin_naming(&mut self) -> Result<(), SessionError> {
        if self.mode != SessionMode::Selecting {
            return Err(self.invalid_transition(SessionMode::NamingUser));
        }
        self.mode = SessionMode::NamingUser;
        Ok(())
    }

    /// Store the captured username (trimmed, non-empty).
    pub fn set_username(&mut self, name: &str) -> Result<(), SessionError> {
        if self.mode != SessionMode::NamingUser {
            return Err(self.invalid_transition(SessionMode::NamingUser));
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyUsername);
        }
        self.username = Some(trimmed.to_string());
        Ok(())
    }

    /// Bind a persona and enter `Chatting`.
    ///
    /// Permitted from `Selecting` (the generic path, including the
    /// reserved `"default"` key which skips naming) and from
    /// `NamingUser`. Seeds the greeting as message 0 and runs the
    /// conversation lifecycle exactly once.
    pub async fn select_persona(&mut self, key: &str) -> Result<(), SessionError> {
        if self.mode == SessionMode::Chatting {
            return Err(self.invalid_transition(SessionMode::Chatting));
        }
        let persona = self
            .registry
            .resolve(key)
            .ok_or_else(|| SessionError::UnknownPersona(key.to_string()))?;
        self.enter_chat(persona).await;
        Ok(())
    }

    async fn enter_chat(&mut self, persona: Persona) {
        self.mode = SessionMode::Chatting;
        let greeting = persona.render_greeting(self.username.as_deref());
        let persona_key = persona.key.clone();
        self.persona = Some(persona);
        self.push_message(Speaker::Agent, greeting.clone());

        let handle = lifecycle::start(
            self.backend.as_ref(),
            self.username.as_deref(),
            &persona_key,
            &greeting,
        )
        .await;
        self.conversation = Some(handle);

        // Greeting is persisted like any agent message (no-op when the
        // lifecycle degraded to local-only).
        self.dispatch_persist(Speaker::Agent, &greeting);
    }

    // --- Chat round ---

    /// Submit one user message and complete the chat round.
    ///
    /// Appends the user message, builds the context window over the
    /// pre-submission transcript, and appends either the model reply or
    /// the fixed fallback. A failed round is local: the session stays
    /// usable and the error is not propagated.
    pub async fn submit(&mut self, text: &str) -> Result<(), SessionError> {
        if self.mode != SessionMode::Chatting {
            return Err(SessionError::NotChatting);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        if self.pending {
            return Err(SessionError::Busy);
        }
        if self.conversation.is_none() {
            return Err(SessionError::ConversationNotStarted);
        }
        let character = self
            .persona
            .as_ref()
            .map(|p| p.key.clone())
            .ok_or(SessionError::NotChatting)?;

        // Context is built from the transcript as it was before this
        // submission, matching what the user saw when they sent it.
        let history = history::window(&self.messages, self.history_window);

        let message = text.to_string();
        self.push_message(Speaker::User, message.clone());
        self.pending = true;
        self.dispatch_persist(Speaker::User, &message);

        let request = ChatRequest {
            message,
            character,
            username: self.username.clone(),
            history,
        };

        let reply = match self.backend.complete(&request).await {
            Ok(response) => response.reply,
            Err(err) => {
                warn!(error = %err, "chat round failed, substituting fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        self.push_message(Speaker::Agent, reply.clone());
        self.dispatch_persist(Speaker::Agent, &reply);
        self.pending = false;
        Ok(())
    }

    /// Discard the whole session and return to `Selecting`.
    ///
    /// Any still-pending persistence task owns its request data and
    /// completes (or fails) without touching the new session.
    pub fn reset(&mut self) {
        info!("session reset");
        self.mode = SessionMode::Selecting;
        self.username = None;
        self.persona = None;
        self.conversation = None;
        self.messages.clear();
        self.pending = false;
    }

    // --- Internals ---

    fn push_message(&mut self, speaker: Speaker, text: String) {
        let ordinal = self.messages.len() as u32;
        self.messages.push(ChatMessage {
            speaker,
            text,
            ordinal,
            created_at: Utc::now(),
        });
    }

    /// Fire-and-forget classify-and-persist for one message.
    ///
    /// Skipped entirely in local-only mode; failures are logged and
    /// swallowed, never retried.
    fn dispatch_persist(&self, speaker: Speaker, text: &str) {
        let Some(ConversationHandle::Remote(conversation_id)) = self.conversation.as_ref() else {
            debug!("local-only session, skipping message persistence");
            return;
        };

        let request = SaveMessageRequest {
            conversation_id: conversation_id.clone(),
            sender: speaker,
            content: text.to_string(),
            meta: classify(text, speaker),
        };

        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(err) = sink.save_message(&request).await {
                warn!(error = %err, sender = %request.sender, "failed to save message");
            }
        });
    }

    fn invalid_transition(&self, to: SessionMode) -> SessionError {
        SessionError::InvalidTransition {
            from: self.mode.to_string(),
            to: to.to_string(),
        }
    }
}

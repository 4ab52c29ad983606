//! Classification metadata attached to persisted messages.
//!
//! Every message saved to the backend carries a `ClassificationRecord`
//! derived from its text at send/receive time. The record is purely
//! observational: downstream analytics read it, the conversation flow
//! never does.
//!
//! All field enums are closed sets even where the current policy only
//! ever emits one variant, so future policy refinement extends an enum
//! instead of refactoring string matching.

use serde::{Deserialize, Serialize};

/// Strength of a lexical signal detected in a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalStrength {
    None,
    High,
}

/// What the agent's reply is focused on. Current policy: always on-text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextFocus {
    OnText,
}

/// The agent's conversational stance. Current policy: always responsive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stance {
    Responsive,
}

/// Scaffolding ladder step of an agent reply.
///
/// The four steps mirror the backend's scaffold policy ladder. The
/// client-side classifier currently always reports `Nudge`; the other
/// steps are reserved for when the backend starts echoing its chosen
/// move back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LadderStep {
    Nudge,
    Reflect,
    Analogy,
    MiniExplanation,
}

/// Affect class of an agent reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Affect {
    Neutral,
    WarmSupportive,
    OverSocial,
}

/// Derived metadata for one message, tagged by the speaker's role.
///
/// Serializes to the exact `meta` JSON the storage endpoint expects:
/// `{"role":"child","on_task":true,...}` for user messages and
/// `{"role":"agent","text_focus":"ON_TEXT",...}` for agent messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ClassificationRecord {
    Child {
        on_task: bool,
        elaborated: bool,
        is_question: bool,
        confusion_signal: SignalStrength,
        autonomy_signal: SignalStrength,
    },
    Agent {
        text_focus: TextFocus,
        stance: Stance,
        ladder_step: LadderStep,
        affect: Affect,
    },
}

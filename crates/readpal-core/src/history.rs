//! Bounded, role-normalized history window for backend context.
//!
//! The stored message list keeps the unbounded full transcript for
//! display; only the trailing slice sent to the backend is bounded.

use readpal_types::chat::ChatMessage;
use readpal_types::wire::HistoryEntry;

/// Default number of trailing messages sent as backend context.
pub const DEFAULT_HISTORY_WINDOW: usize = 8;

/// Build the outgoing context window: the trailing `limit` messages,
/// role-normalized to `user`/`assistant`, in original order.
///
/// Pure function; never mutates or truncates the stored list.
pub fn window(messages: &[ChatMessage], limit: usize) -> Vec<HistoryEntry> {
    let start = messages.len().saturating_sub(limit);
    messages[start..].iter().map(HistoryEntry::from).collect()
}

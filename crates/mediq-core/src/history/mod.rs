//! Read-only queries over the session history.
//!
//! These functions never mutate the store; they borrow the history slice
//! and return references or owned summaries.

use mediq_types::consult::{ChatSession, MessageRole, SessionSummary};

/// Filter the history down to sessions matching `term`.
///
/// Case-insensitive; a session matches when its title or any message
/// content contains the term. An empty term returns the full history.
/// Result order is history order.
pub fn search<'a>(history: &'a [ChatSession], term: &str) -> Vec<&'a ChatSession> {
    if term.is_empty() {
        return history.iter().collect();
    }
    let needle = term.to_lowercase();
    history
        .iter()
        .filter(|session| {
            session.title.to_lowercase().contains(&needle)
                || session
                    .messages
                    .iter()
                    .any(|msg| msg.content.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Summarize one session: message counts plus the diagnosis of the most
/// recent assistant message that carries one.
pub fn summarize(session: &ChatSession) -> SessionSummary {
    let last_diagnosis = session
        .messages
        .iter()
        .rev()
        .find(|msg| msg.role == MessageRole::Assistant && msg.diagnosis.is_some())
        .and_then(|msg| msg.diagnosis.clone());
    SessionSummary {
        total_messages: session.messages.len(),
        user_message_count: session
            .messages
            .iter()
            .filter(|msg| msg.role == MessageRole::User)
            .count(),
        last_diagnosis,
    }
}

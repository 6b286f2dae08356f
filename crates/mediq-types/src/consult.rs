//! Consultation session and message types for Mediq.
//!
//! These types model one consultation between a user and the assistant:
//! an ordered transcript of messages plus session lifecycle timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::diagnosis::DiagnosisResult;

/// Role of a message within a consultation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message within a consultation.
///
/// Messages are append-only: once added to a session they are never edited
/// or reordered. Assistant messages may carry a structured diagnosis.
/// Message ids are UUIDv7, so they sort by creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Structured analysis attached to assistant replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<DiagnosisResult>,
}

impl Message {
    /// Create a user message with the given content.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
            diagnosis: None,
        }
    }

    /// Create an assistant message carrying a diagnosis.
    pub fn assistant(content: impl Into<String>, diagnosis: DiagnosisResult) -> Self {
        Self {
            id: Uuid::now_v7(),
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
            diagnosis: Some(diagnosis),
        }
    }
}

/// One continuous consultation, identified by id, holding an ordered
/// transcript.
///
/// Invariant: `last_updated >= created_at`. The `messages` vector is in
/// send order and is only ever appended to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ChatSession {
    /// Title given to a session before the first user message names it.
    pub const DEFAULT_TITLE: &'static str = "New Consultation";

    /// Create an empty session with a fresh id and the default title.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: Self::DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            last_updated: now,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only rollup of a session, produced by the history query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_messages: usize,
    pub user_message_count: usize,
    /// Diagnosis of the most recent assistant message that carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_diagnosis: Option<DiagnosisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::Severity;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: MessageRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MessageRole::Assistant);
    }

    #[test]
    fn test_user_message_has_no_diagnosis() {
        let msg = Message::user("I have a cough");
        assert_eq!(msg.role, MessageRole::User);
        assert_eq!(msg.content, "I have a cough");
        assert!(msg.diagnosis.is_none());
    }

    #[test]
    fn test_assistant_message_carries_diagnosis() {
        let diagnosis = DiagnosisResult {
            possible_conditions: vec!["Common cold".to_string()],
            recommended_actions: vec!["Rest".to_string()],
            avoid: vec!["Cold drinks".to_string()],
            severity: Severity::Low,
        };
        let msg = Message::assistant("Here is my analysis:", diagnosis);
        assert_eq!(msg.role, MessageRole::Assistant);
        assert_eq!(
            msg.diagnosis.as_ref().map(|d| d.severity),
            Some(Severity::Low)
        );
    }

    #[test]
    fn test_message_ids_are_time_ordered() {
        let a = Message::user("first");
        let b = Message::user("second");
        // UUIDv7 encodes a millisecond timestamp in its most significant bits.
        assert!(a.id <= b.id);
    }

    #[test]
    fn test_new_session_defaults() {
        let session = ChatSession::new();
        assert_eq!(session.title, ChatSession::DEFAULT_TITLE);
        assert!(session.messages.is_empty());
        assert_eq!(session.created_at, session.last_updated);
    }

    #[test]
    fn test_session_serialize_timestamps_iso8601() {
        let session = ChatSession::new();
        let json = serde_json::to_string(&session).unwrap();
        let parsed: ChatSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, session.id);
        assert_eq!(parsed.created_at, session.created_at);
        // RFC 3339 timestamps always contain the date/time separator.
        assert!(json.contains("T"));
    }

    #[test]
    fn test_user_message_serde_omits_diagnosis() {
        let msg = Message::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("diagnosis"));
    }
}

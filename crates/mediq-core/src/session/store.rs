//! In-memory session store: current session, history, pending flag.
//!
//! The store is pure state plus mutation operations; it performs no IO.
//! It is exclusively owned by its caller (the consultation service in
//! production, tests elsewhere) and is never shared behind a global.

use mediq_types::consult::{ChatSession, Message, MessageRole};
use mediq_types::error::StoreError;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::title::derive_title;

/// Holds the consultation state for one active user.
///
/// `current` may be a detached copy of a history entry (edits do not reach
/// `history` until [`SessionStore::save`]) or a fresh unsaved session.
/// `history` is most-recently-saved first and contains each session id at
/// most once.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<ChatSession>,
    history: Vec<ChatSession>,
    pending: bool,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over an existing history list.
    ///
    /// Duplicate ids violate the store invariant; later duplicates are
    /// dropped so the invariant holds no matter what a snapshot contained.
    pub fn with_history(history: Vec<ChatSession>) -> Self {
        let mut seen = Vec::new();
        let mut unique = Vec::with_capacity(history.len());
        for session in history {
            if seen.contains(&session.id) {
                debug!(session_id = %session.id, "dropping duplicate history entry");
                continue;
            }
            seen.push(session.id);
            unique.push(session);
        }
        Self {
            current: None,
            history: unique,
            pending: false,
        }
    }

    /// The session being edited, if any.
    pub fn current(&self) -> Option<&ChatSession> {
        self.current.as_ref()
    }

    /// Saved sessions, most recently saved first.
    pub fn history(&self) -> &[ChatSession] {
        &self.history
    }

    /// Whether a diagnosis request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start a fresh session, replacing `current`. History is untouched.
    pub fn start_session(&mut self) -> &ChatSession {
        let session = ChatSession::new();
        debug!(session_id = %session.id, "started new session");
        self.current.insert(session)
    }

    /// Append a message to the current session and bump `last_updated`.
    ///
    /// The first user message also names the session (see
    /// [`derive_title`]). Fails with [`StoreError::NoActiveSession`] when
    /// no session is current.
    pub fn append_message(&mut self, msg: Message) -> Result<(), StoreError> {
        let session = self.current.as_mut().ok_or(StoreError::NoActiveSession)?;
        if session.messages.is_empty() && msg.role == MessageRole::User {
            session.title = derive_title(&msg.content);
        }
        session.messages.push(msg);
        session.last_updated = Utc::now();
        Ok(())
    }

    /// Save the current session into history.
    ///
    /// No-op when there is no current session or it has no messages.
    /// An existing entry with the same id is replaced in place; otherwise
    /// the session is inserted at the front.
    pub fn save(&mut self) {
        let Some(current) = &self.current else {
            return;
        };
        if current.messages.is_empty() {
            return;
        }
        match self.history.iter().position(|s| s.id == current.id) {
            Some(index) => self.history[index] = current.clone(),
            None => self.history.insert(0, current.clone()),
        }
    }

    /// Make `current` an independent copy of the history entry with `id`.
    ///
    /// Later edits to `current` do not reach the stored entry until the
    /// next [`SessionStore::save`].
    pub fn load_session(&mut self, id: Uuid) -> Result<&ChatSession, StoreError> {
        let session = self
            .history
            .iter()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound)?
            .clone();
        debug!(session_id = %id, "loaded session from history");
        Ok(self.current.insert(session))
    }

    /// Remove the history entry with `id`.
    ///
    /// Fails with [`StoreError::NotFound`] for an unknown id, without
    /// mutating anything. `current` is untouched even when its id matches.
    pub fn delete_session(&mut self, id: Uuid) -> Result<(), StoreError> {
        let index = self
            .history
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound)?;
        self.history.remove(index);
        debug!(session_id = %id, "deleted session from history");
        Ok(())
    }

    /// Set the in-flight diagnosis flag.
    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }
}

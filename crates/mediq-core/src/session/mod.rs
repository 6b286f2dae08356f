//! Session state and persistence abstractions for Mediq.
//!
//! `SessionStore` holds the in-memory consultation state (current session,
//! history, pending flag). The `HistoryRepository` trait is the port the
//! infrastructure layer implements for snapshot persistence.

pub mod repository;
pub mod store;
pub mod title;

//! Shared domain types for Mediq.
//!
//! This crate contains the core domain types used across the Mediq
//! consultation assistant: messages, sessions, diagnosis results, identity,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod consult;
pub mod diagnosis;
pub mod error;
pub mod identity;

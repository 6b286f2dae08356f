//! Consultation orchestration for Mediq.
//!
//! This module defines the diagnosis provider port and the service that
//! drives one consultation turn: user input, session mutation, diagnosis
//! request, session mutation again.

pub mod provider;
pub mod service;

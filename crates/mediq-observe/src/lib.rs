//! Observability plumbing for Mediq.

pub mod tracing_setup;

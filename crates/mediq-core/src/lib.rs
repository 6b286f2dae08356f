//! Business logic and trait definitions for Mediq.
//!
//! This crate defines the "ports" (the diagnosis provider and history
//! repository traits) that the infrastructure layer implements. It depends
//! only on `mediq-types` -- never on `mediq-infra` or any IO crate.

pub mod consult;
pub mod history;
pub mod session;

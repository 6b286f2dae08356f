//! Diagnosis provider implementations.

pub mod canned;

pub use canned::CannedDiagnosisProvider;

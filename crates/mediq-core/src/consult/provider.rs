//! DiagnosisProvider trait definition.
//!
//! This is the abstraction every diagnosis backend implements. The shipped
//! implementation (`CannedDiagnosisProvider` in mediq-infra) replays a fixed
//! payload; tests supply deterministic fakes. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition).

use mediq_types::diagnosis::{Assessment, DiagnosisError};

/// Trait for diagnosis backends.
///
/// One call analyzes one free-text symptom description and returns a prose
/// narrative plus the structured result. Calls are independent; the provider
/// holds no session state.
pub trait DiagnosisProvider: Send + Sync {
    /// Human-readable provider name (e.g., "canned").
    fn name(&self) -> &str;

    /// Analyze a symptom description.
    fn diagnose(
        &self,
        input: &str,
    ) -> impl std::future::Future<Output = Result<Assessment, DiagnosisError>> + Send;
}

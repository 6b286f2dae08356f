//! HistoryRepository trait definition.
//!
//! The persistence port for the session history list. Implementations live
//! in mediq-infra (e.g., `JsonHistoryRepository`). Uses native async fn in
//! traits (RPITIT, Rust 2024 edition).

use mediq_types::consult::ChatSession;
use mediq_types::error::RepositoryError;

/// Repository trait for history snapshot persistence.
///
/// The store itself stays in memory; the repository only loads a snapshot
/// at startup and persists the full history list after mutations.
pub trait HistoryRepository: Send + Sync {
    /// Load the persisted history, most recently saved first.
    ///
    /// A missing snapshot yields an empty list, not an error.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;

    /// Persist the full history list, replacing any previous snapshot.
    fn persist(
        &self,
        history: &[ChatSession],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

use thiserror::Error;

use crate::diagnosis::DiagnosisError;

/// Errors from session store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The operation requires a current session and none exists.
    #[error("no active session")]
    NoActiveSession,

    /// No history entry matches the given session id.
    #[error("session not found")]
    NotFound,
}

/// Errors from submitting a consultation turn.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The trimmed input was empty. Rejected before any mutation.
    #[error("empty input")]
    EmptyInput,

    /// A diagnosis request is already in flight. Rejected, not queued.
    #[error("a diagnosis request is already in flight")]
    Busy,

    /// The diagnosis provider failed or timed out. The user message stays
    /// in the transcript.
    #[error("could not analyze symptoms: {0}")]
    Provider(#[from] DiagnosisError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from history snapshot persistence (used by trait definitions in
/// mediq-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(StoreError::NoActiveSession.to_string(), "no active session");
        assert_eq!(StoreError::NotFound.to_string(), "session not found");
    }

    #[test]
    fn test_submit_error_wraps_provider_failure() {
        let err: SubmitError = DiagnosisError::Timeout.into();
        assert!(matches!(err, SubmitError::Provider(DiagnosisError::Timeout)));
        assert!(err.to_string().contains("could not analyze"));
    }

    #[test]
    fn test_repository_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RepositoryError = io.into();
        assert!(err.to_string().contains("denied"));
    }
}

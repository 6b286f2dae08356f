//! Consultation service driving the turn state machine.
//!
//! `ConsultService` owns the session store and coordinates one turn at a
//! time: append the user message, save, request a diagnosis, append the
//! assistant reply, save again. At most one diagnosis request is in flight;
//! overlapping submissions are rejected, not queued.

use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::{info, warn};
use uuid::Uuid;

use mediq_types::config::ProviderConfig;
use mediq_types::consult::Message;
use mediq_types::diagnosis::{Assessment, DiagnosisError};
use mediq_types::error::SubmitError;

use crate::consult::provider::DiagnosisProvider;
use crate::session::repository::HistoryRepository;
use crate::session::store::SessionStore;

/// State of the consultation turn machine.
///
/// `Failed` is sticky after a provider failure until the next submission,
/// so callers can tell the last turn did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingResponse,
    Failed,
}

/// Timing and retry policy for one diagnosis request.
#[derive(Debug, Clone)]
pub struct TurnPolicy {
    /// Deadline for a single provider attempt.
    pub timeout: Duration,
    /// Additional attempts after a transient failure.
    pub retry_attempts: u32,
    /// Base delay between attempts; grows linearly with the attempt number.
    pub retry_backoff: Duration,
}

impl Default for TurnPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retry_attempts: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl From<&ProviderConfig> for TurnPolicy {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            retry_attempts: config.retry_attempts,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }
}

/// Orchestrates consultation turns against an injected provider and
/// snapshot repository.
///
/// Generic over `DiagnosisProvider` and `HistoryRepository` to maintain
/// clean architecture (mediq-core never depends on mediq-infra).
pub struct ConsultService<P: DiagnosisProvider, R: HistoryRepository> {
    store: SessionStore,
    provider: P,
    repository: R,
    policy: TurnPolicy,
    turn: TurnState,
}

impl<P: DiagnosisProvider, R: HistoryRepository> ConsultService<P, R> {
    /// Create a service over an existing store.
    pub fn new(store: SessionStore, provider: P, repository: R, policy: TurnPolicy) -> Self {
        Self {
            store,
            provider,
            repository,
            policy,
            turn: TurnState::Idle,
        }
    }

    /// Read access to the session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Mutable access to the session store.
    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    /// Access the snapshot repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Access the diagnosis provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Current turn state.
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    /// Submit one symptom description and run the full turn.
    ///
    /// Fails with `EmptyInput` on blank text and `Busy` while a request is
    /// in flight, both before any mutation. Starts a session automatically
    /// when none is current. The user message is saved and persisted before
    /// the provider is called, so it survives a failed or interrupted turn.
    /// Returns the assistant message on success.
    #[tracing::instrument(name = "submit_turn", skip(self, text))]
    pub async fn submit(&mut self, text: &str) -> Result<Message, SubmitError> {
        let input = text.trim();
        if input.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        if self.in_flight() {
            return Err(SubmitError::Busy);
        }

        if self.store.current().is_none() {
            self.store.start_session();
        }

        self.store.append_message(Message::user(input))?;
        self.store.save();
        self.persist_history().await;

        self.turn = TurnState::AwaitingResponse;
        self.store.set_pending(true);

        match self.request_diagnosis(input).await {
            Ok(assessment) => {
                let reply = Message::assistant(assessment.narrative, assessment.result);
                self.store.append_message(reply.clone())?;
                self.store.save();
                self.persist_history().await;
                self.store.set_pending(false);
                self.turn = TurnState::Idle;
                if let Some(session) = self.store.current() {
                    info!(
                        session_id = %session.id,
                        provider = self.provider.name(),
                        "turn completed"
                    );
                }
                Ok(reply)
            }
            Err(err) => {
                // The user message stays in the transcript; only the reply
                // is missing.
                self.store.set_pending(false);
                self.turn = TurnState::Failed;
                warn!(provider = self.provider.name(), error = %err, "turn failed");
                Err(SubmitError::Provider(err))
            }
        }
    }

    /// Start a fresh session. Fails with `Busy` while a request is in flight.
    pub fn start_new(&mut self) -> Result<(), SubmitError> {
        if self.in_flight() {
            return Err(SubmitError::Busy);
        }
        self.store.start_session();
        self.turn = TurnState::Idle;
        Ok(())
    }

    /// Re-open a saved session for continuation.
    ///
    /// Switching sessions while a request is in flight is disallowed.
    pub fn open_session(&mut self, id: Uuid) -> Result<(), SubmitError> {
        if self.in_flight() {
            return Err(SubmitError::Busy);
        }
        self.store.load_session(id)?;
        self.turn = TurnState::Idle;
        Ok(())
    }

    /// Delete a saved session and persist the shrunken history.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), SubmitError> {
        if self.in_flight() {
            return Err(SubmitError::Busy);
        }
        self.store.delete_session(id)?;
        self.persist_history().await;
        Ok(())
    }

    fn in_flight(&self) -> bool {
        self.turn == TurnState::AwaitingResponse || self.store.is_pending()
    }

    /// Call the provider under the configured deadline, retrying transient
    /// failures up to the policy's attempt budget with linear backoff.
    async fn request_diagnosis(&self, input: &str) -> Result<Assessment, DiagnosisError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let outcome = match timeout(self.policy.timeout, self.provider.diagnose(input)).await {
                Ok(result) => result,
                Err(_) => Err(DiagnosisError::Timeout),
            };
            match outcome {
                Ok(assessment) => return Ok(assessment),
                Err(err) if err.is_transient() && attempt <= self.policy.retry_attempts => {
                    warn!(
                        provider = self.provider.name(),
                        attempt,
                        error = %err,
                        "transient provider failure, retrying"
                    );
                    sleep(self.policy.retry_backoff * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Best-effort snapshot persistence; a failed write never fails a turn.
    async fn persist_history(&self) {
        if let Err(err) = self.repository.persist(self.store.history()).await {
            warn!(error = %err, "failed to persist history snapshot");
        }
    }
}

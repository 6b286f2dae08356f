//! Application state wiring the core services to their infra implementations.
//!
//! Services in mediq-core are generic over provider/repository traits;
//! AppState pins them to the concrete infra types.

use std::path::PathBuf;

use tracing::info;

use mediq_core::consult::service::{ConsultService, TurnPolicy};
use mediq_core::session::repository::HistoryRepository;
use mediq_core::session::store::SessionStore;
use mediq_infra::filesystem::{load_config, resolve_data_dir};
use mediq_infra::provider::CannedDiagnosisProvider;
use mediq_infra::seed;
use mediq_infra::snapshot::JsonHistoryRepository;
use mediq_types::config::GlobalConfig;
use mediq_types::identity::AuthContext;

/// Concrete type alias for the service generics pinned to infra
/// implementations.
pub type ConcreteConsultService = ConsultService<CannedDiagnosisProvider, JsonHistoryRepository>;

/// Shared application state for all CLI commands.
pub struct AppState {
    pub config: GlobalConfig,
    pub auth: AuthContext,
    pub data_dir: PathBuf,
    pub service: ConcreteConsultService,
}

impl AppState {
    /// Initialize the application state: load config, load (or seed) the
    /// history snapshot, and wire the consultation service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await?;

        let repository = JsonHistoryRepository::new(data_dir.join("history.json"));
        let history = if repository.exists() {
            repository.load().await?
        } else {
            let seeded = seed::example_history();
            repository.persist(&seeded).await?;
            info!(sessions = seeded.len(), "installed example history");
            seeded
        };

        let auth = match config.user.clone() {
            Some(user) => AuthContext::authenticated(user),
            None => AuthContext::anonymous(),
        };

        let service = ConsultService::new(
            SessionStore::with_history(history),
            CannedDiagnosisProvider::from_config(&config.provider),
            repository,
            TurnPolicy::from(&config.provider),
        );

        Ok(Self {
            config,
            auth,
            data_dir,
            service,
        })
    }
}

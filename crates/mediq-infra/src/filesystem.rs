//! Data directory resolution and config loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use mediq_types::config::GlobalConfig;
use mediq_types::error::RepositoryError;

/// Resolve the Mediq data directory.
///
/// Order: `MEDIQ_DATA_DIR` environment variable, then `~/.mediq`, then
/// `./.mediq` as a last resort.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDIQ_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mediq");
    }

    PathBuf::from(".mediq")
}

/// Load `config.toml` from the data directory.
///
/// A missing file yields the default configuration; a malformed one is an
/// error rather than a silent fallback.
pub async fn load_config(data_dir: &Path) -> Result<GlobalConfig, RepositoryError> {
    let path = data_dir.join("config.toml");
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GlobalConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    toml::from_str(&raw).map_err(|err| RepositoryError::Serialization(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_config_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).await.unwrap();
        assert_eq!(config.provider.timeout_secs, 30);
        assert!(config.user.is_none());
    }

    #[tokio::test]
    async fn test_load_config_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("config.toml"),
            "[provider]\ntimeout_secs = 5\n\n[user]\nname = \"Asha Rao\"\nemail = \"asha@example.com\"\n",
        )
        .await
        .unwrap();
        let config = load_config(dir.path()).await.unwrap();
        assert_eq!(config.provider.timeout_secs, 5);
        assert_eq!(config.user.unwrap().name, "Asha Rao");
    }

    #[tokio::test]
    async fn test_load_config_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("config.toml"), "not = [valid")
            .await
            .unwrap();
        assert!(load_config(dir.path()).await.is_err());
    }
}

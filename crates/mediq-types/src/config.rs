//! Global configuration types for Mediq.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls
//! provider timing/retry behavior and the signed-in user profile.

use serde::{Deserialize, Serialize};

use crate::identity::UserProfile;

/// Top-level configuration for the Mediq CLI.
///
/// Loaded from `<data_dir>/config.toml`. All fields have sensible defaults;
/// a missing file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Diagnosis provider timing and retry settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Signed-in user. Absent means unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Timing and retry settings for the diagnosis provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Deadline for one diagnosis request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Additional attempts after a transient failure.
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Base delay between retry attempts, in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Simulated base latency of the canned provider, in milliseconds.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Upper bound of random jitter added to the base latency.
    #[serde(default = "default_response_jitter_ms")]
    pub response_jitter_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    500
}

fn default_response_delay_ms() -> u64 {
    2000
}

fn default_response_jitter_ms() -> u64 {
    1000
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            retry_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            response_delay_ms: default_response_delay_ms(),
            response_jitter_ms: default_response_jitter_ms(),
        }
    }
}

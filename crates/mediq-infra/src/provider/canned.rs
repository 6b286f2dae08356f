//! Canned diagnosis provider.
//!
//! Replays a fixed analysis payload with randomized severity and simulated
//! latency. This is the demo backend the product ships with; a real
//! inference service would implement the same trait.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

use mediq_core::consult::provider::DiagnosisProvider;
use mediq_types::config::ProviderConfig;
use mediq_types::diagnosis::{Assessment, DiagnosisError, DiagnosisResult, Severity};

const NARRATIVE: &str =
    "Thank you for sharing your symptoms. Based on what you've described, here is my analysis:";

/// Demo provider returning a fixed payload after a simulated delay.
pub struct CannedDiagnosisProvider {
    delay: Duration,
    jitter: Duration,
}

impl CannedDiagnosisProvider {
    /// Create a provider with the given base latency and jitter bound.
    pub fn new(delay: Duration, jitter: Duration) -> Self {
        Self { delay, jitter }
    }

    /// Create a provider from the configured timing values.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            Duration::from_millis(config.response_delay_ms),
            Duration::from_millis(config.response_jitter_ms),
        )
    }

    /// A provider that answers immediately. Useful in tests and scripts.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    fn simulated_latency(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.delay;
        }
        let jitter_ms = rand::thread_rng().gen_range(0..self.jitter.as_millis() as u64);
        self.delay + Duration::from_millis(jitter_ms)
    }
}

/// Sample a severity with the demo weights: 30% high, 30% medium, 40% low.
fn roll_severity() -> Severity {
    let roll: f64 = rand::thread_rng().r#gen();
    if roll > 0.7 {
        Severity::High
    } else if roll > 0.4 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn canned_result(severity: Severity) -> DiagnosisResult {
    DiagnosisResult {
        possible_conditions: vec![
            "Viral upper respiratory infection".to_string(),
            "Common cold".to_string(),
            "Allergic rhinitis".to_string(),
        ],
        recommended_actions: vec![
            "Rest and hydration".to_string(),
            "Paracetamol 500mg for pain relief".to_string(),
            "Throat lozenges".to_string(),
            "Warm salt water gargles".to_string(),
        ],
        avoid: vec![
            "Cold drinks and foods".to_string(),
            "Smoking and secondhand smoke".to_string(),
            "Crowded places".to_string(),
            "Excessive physical activity".to_string(),
        ],
        severity,
    }
}

impl DiagnosisProvider for CannedDiagnosisProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn diagnose(&self, input: &str) -> Result<Assessment, DiagnosisError> {
        if input.trim().is_empty() {
            return Err(DiagnosisError::Invalid(
                "symptom description is empty".to_string(),
            ));
        }

        let latency = self.simulated_latency();
        if !latency.is_zero() {
            sleep(latency).await;
        }

        let severity = roll_severity();
        debug!(%severity, latency_ms = latency.as_millis() as u64, "canned diagnosis ready");
        Ok(Assessment {
            narrative: NARRATIVE.to_string(),
            result: canned_result(severity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_provider_returns_payload() {
        let provider = CannedDiagnosisProvider::instant();
        let assessment = provider.diagnose("I have a sore throat").await.unwrap();
        assert!(assessment.narrative.contains("analysis"));
        assert_eq!(assessment.result.possible_conditions.len(), 3);
        assert_eq!(assessment.result.recommended_actions.len(), 4);
        assert_eq!(assessment.result.avoid.len(), 4);
    }

    #[tokio::test]
    async fn test_blank_input_is_invalid() {
        let provider = CannedDiagnosisProvider::instant();
        let err = provider.diagnose("   ").await.unwrap_err();
        assert!(matches!(err, DiagnosisError::Invalid(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_delay_is_honored() {
        let provider =
            CannedDiagnosisProvider::new(Duration::from_millis(30), Duration::ZERO);
        let start = std::time::Instant::now();
        provider.diagnose("cough").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_severity_weights_cover_all_variants() {
        // Sampling is random; over many rolls every variant should appear.
        let mut seen = [false; 3];
        for _ in 0..1000 {
            match roll_severity() {
                Severity::Low => seen[0] = true,
                Severity::Medium => seen[1] = true,
                Severity::High => seen[2] = true,
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}

//! Diagnosis types for Mediq.
//!
//! These types model the data shapes at the diagnosis provider boundary:
//! the structured result attached to assistant replies, the full provider
//! response, and the provider error kinds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// Triage-like classification of a diagnosis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!("invalid severity: '{other}'")),
        }
    }
}

/// Structured analysis of a symptom description.
///
/// The list fields keep provider order; they are never sorted or deduped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub possible_conditions: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub avoid: Vec<String>,
    pub severity: Severity,
}

/// Full provider response for one symptom submission: a prose narrative
/// plus the structured result rendered alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub narrative: String,
    pub result: DiagnosisResult,
}

/// Errors from the diagnosis provider boundary.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// The provider could not be reached or returned a transient failure.
    #[error("diagnosis provider unavailable: {0}")]
    Unavailable(String),

    /// The request ran past the configured deadline.
    #[error("diagnosis request timed out")]
    Timeout,

    /// The provider rejected the request or produced an unusable response.
    #[error("invalid diagnosis request: {0}")]
    Invalid(String),
}

impl DiagnosisError {
    /// Whether a bounded retry is worthwhile for this failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, DiagnosisError::Unavailable(_) | DiagnosisError::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_roundtrip() {
        for severity in [Severity::Low, Severity::Medium, Severity::High] {
            let s = severity.to_string();
            let parsed: Severity = s.parse().unwrap();
            assert_eq!(severity, parsed);
        }
    }

    #[test]
    fn test_severity_serde() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_severity_rejects_unknown() {
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_diagnosis_result_serde_roundtrip() {
        let result = DiagnosisResult {
            possible_conditions: vec!["Acid reflux".to_string(), "Gastritis".to_string()],
            recommended_actions: vec!["Antacid tablets".to_string()],
            avoid: vec!["Spicy food".to_string(), "Coffee".to_string()],
            severity: Severity::Low,
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: DiagnosisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        // Provider order is preserved through serialization.
        assert_eq!(parsed.possible_conditions[0], "Acid reflux");
    }

    #[test]
    fn test_diagnosis_error_transience() {
        assert!(DiagnosisError::Unavailable("503".to_string()).is_transient());
        assert!(DiagnosisError::Timeout.is_transient());
        assert!(!DiagnosisError::Invalid("empty input".to_string()).is_transient());
    }

    #[test]
    fn test_diagnosis_error_display() {
        let err = DiagnosisError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}

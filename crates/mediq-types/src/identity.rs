//! Resolved identity types for Mediq.
//!
//! Authentication itself is an external concern: the identity provider hands
//! the application an already-resolved `AuthContext`. Nothing in the
//! consultation core performs login or token handling.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Outcome of identity resolution, as supplied by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    pub is_authenticated: bool,
    pub user: Option<UserProfile>,
}

impl AuthContext {
    /// An unauthenticated context with no profile.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }

    /// An authenticated context carrying the resolved profile.
    pub fn authenticated(user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_context() {
        let auth = AuthContext::anonymous();
        assert!(!auth.is_authenticated);
        assert!(auth.user.is_none());
    }

    #[test]
    fn test_authenticated_context() {
        let auth = AuthContext::authenticated(UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        });
        assert!(auth.is_authenticated);
        assert_eq!(auth.user.unwrap().email, "asha@example.com");
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = UserProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}

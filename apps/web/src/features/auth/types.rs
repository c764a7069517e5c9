//! Session and login payload types for auth API calls. Login payloads carry
//! credentials, so they must never be logged.

use serde::{Deserialize, Serialize};

/// Role value that unlocks admin-only routes.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub role: String,
}

impl UserSession {
    /// True when the session carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_session_serialization() {
        let session = UserSession {
            user_id: "usr_01".to_string(),
            email: "op@atrium.dev".to_string(),
            role: "admin".to_string(),
        };

        let json = serde_json::to_string(&session).expect("Failed to serialize");
        assert!(json.contains("usr_01"));
        assert!(json.contains("op@atrium.dev"));

        let deserialized: UserSession = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized, session);
        assert!(deserialized.is_admin());
    }

    #[test]
    fn test_non_admin_role() {
        let session = UserSession {
            user_id: "usr_02".to_string(),
            email: "member@atrium.dev".to_string(),
            role: "member".to_string(),
        };

        assert!(!session.is_admin());
    }
}

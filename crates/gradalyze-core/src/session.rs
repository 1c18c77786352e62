//! Process-wide session state with an explicit lifecycle.
//!
//! Holds the bearer token and cached profile that gate all protected
//! operations. `load` runs once at app start, `clear` at logout; absence of
//! either field means "logged out".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::UserProfile;

/// Persisted session state: opaque bearer token plus the cached profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl SessionContext {
    /// Start a session from a successful credential exchange.
    pub fn new(auth_token: String, user: UserProfile) -> Self {
        Self {
            auth_token: Some(auth_token),
            user: Some(user),
        }
    }

    /// Load the session from disk. A missing or unreadable file yields a
    /// logged-out session rather than an error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding corrupt session file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persist the session to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Log out: drop both fields and remove the file.
    pub fn clear(&mut self, path: &Path) -> Result<()> {
        self.auth_token = None;
        self.user = None;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Both the token and the profile must be present.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some() && self.user.is_some()
    }

    /// Backend user id, when logged in.
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 42,
            email: "student@example.com".to_string(),
            name: "Student".to_string(),
            course: "BS Computer Science".to_string(),
            transcript_url: None,
            transcript_name: None,
            analysis_snapshot: None,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = SessionContext::new("token-abc".to_string(), profile());
        session.save(&path).unwrap();

        let loaded = SessionContext::load(&path);
        assert_eq!(loaded, session);
        assert!(loaded.is_authenticated());
        assert_eq!(loaded.user_id(), Some(42));
    }

    #[test]
    fn missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = SessionContext::load(&dir.path().join("absent.json"));
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn corrupt_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let session = SessionContext::load(&path);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clear_removes_state_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = SessionContext::new("token-abc".to_string(), profile());
        session.save(&path).unwrap();
        session.clear(&path).unwrap();

        assert!(!session.is_authenticated());
        assert!(!path.exists());
        // clearing twice is fine
        session.clear(&path).unwrap();
    }

    #[test]
    fn token_without_profile_is_not_authenticated() {
        let session = SessionContext {
            auth_token: Some("token".to_string()),
            user: None,
        };
        assert!(!session.is_authenticated());
    }
}

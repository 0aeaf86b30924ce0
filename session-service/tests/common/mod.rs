use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::TokenConfig;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use session_service::session::errors::SessionError;
use session_service::session::models::Credential;
use session_service::session::models::RefreshSession;
use session_service::session::ports::CredentialStore;

/// In-memory credential store standing in for the persistence collaborator.
///
/// Mirrors the contract a real store provides: unique-index semantics on
/// email and token (a duplicate insert is not acknowledged), and a revoke
/// that only acknowledges a live session.
pub struct InMemoryCredentialStore {
    credentials: Mutex<HashMap<String, Credential>>,
    sessions: Mutex<HashMap<String, RefreshSession>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            credentials: Mutex::new(HashMap::new()),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn credential_count(&self) -> usize {
        self.credentials.lock().unwrap().len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    /// Backdate a stored session's expiry, simulating a record whose signed
    /// token still looks valid.
    pub fn force_expire_session(&self, token: &str, expires_at: DateTime<Utc>) {
        let mut sessions = self.sessions.lock().unwrap();
        let session = sessions.get_mut(token).expect("session not stored");
        session.expires_at = expires_at;
    }

    pub fn stored_session(&self, token: &str) -> Option<RefreshSession> {
        self.sessions.lock().unwrap().get(token).cloned()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credential>, SessionError> {
        Ok(self.credentials.lock().unwrap().get(email).cloned())
    }

    async fn insert_credential(&self, credential: Credential) -> Result<bool, SessionError> {
        let mut credentials = self.credentials.lock().unwrap();
        if credentials.contains_key(credential.email.as_str()) {
            return Ok(false);
        }
        credentials.insert(credential.email.as_str().to_string(), credential);
        Ok(true)
    }

    async fn find_refresh_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshSession>, SessionError> {
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn insert_refresh_session(
        &self,
        session: RefreshSession,
    ) -> Result<bool, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&session.token) {
            return Ok(false);
        }
        sessions.insert(session.token.clone(), session);
        Ok(true)
    }

    async fn revoke_refresh_session(&self, token: &str) -> Result<bool, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(token) {
            Some(session) if !session.revoked => {
                session.revoked = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

pub fn test_token_config() -> TokenConfig {
    TokenConfig::new(
        "session-service-tests",
        "session-clients",
        "test-secret-key-for-jwt-signing-at-least-32-bytes",
        Duration::minutes(15),
        Duration::days(7),
    )
    .expect("test token config must be valid")
}

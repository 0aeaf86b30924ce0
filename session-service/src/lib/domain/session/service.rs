use std::sync::Arc;

use async_trait::async_trait;
use auth::HashingService;
use auth::SaltedHash;
use auth::TokenClaim;
use auth::TokenCodec;
use auth::TokenConfig;
use auth::TokenKind;
use chrono::Utc;

use crate::domain::session::guard::AccessGuard;
use crate::domain::session::guard::SUBJECT_CLAIM;
use crate::domain::session::models::Credential;
use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::RefreshSession;
use crate::domain::session::models::SubjectId;
use crate::domain::session::models::TokenPair;
use crate::session::errors::SessionError;
use crate::session::ports::CredentialStore;
use crate::session::ports::SessionServicePort;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Session-lifecycle orchestrator.
///
/// Drives sign-up, sign-in, sign-out, and refresh by composing the hashing
/// service, the token codec, and the credential store. Holds no mutable
/// state of its own; everything durable lives behind the store port, so
/// concurrent operations share nothing in-process.
pub struct SessionService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    hashing: HashingService,
    codec: TokenCodec,
    guard: AccessGuard,
    config: TokenConfig,
}

impl<CS> SessionService<CS>
where
    CS: CredentialStore,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential/refresh-session persistence implementation
    /// * `config` - Validated process-wide token configuration
    pub fn new(store: Arc<CS>, config: TokenConfig) -> Self {
        Self {
            store,
            hashing: HashingService::new(),
            codec: TokenCodec::new(),
            guard: AccessGuard::new(),
            config,
        }
    }

    /// Issue a fresh token pair for a subject and persist the refresh
    /// session.
    ///
    /// The collision check guards against token-id generator defects: a
    /// freshly issued refresh token already present in the store is a hard
    /// failure, never silently overwritten or regenerated. The check and the
    /// insert are not atomic as a pair; the store's unique-index rejection
    /// (an unacknowledged insert) backstops the race.
    async fn issue_and_store(&self, subject_id: &SubjectId) -> Result<TokenPair, SessionError> {
        let subject_claim = TokenClaim::new(SUBJECT_CLAIM, subject_id.to_string());

        let access_token = self
            .codec
            .issue(
                &self.config,
                TokenKind::Access,
                std::slice::from_ref(&subject_claim),
            )
            .map_err(|e| SessionError::PersistenceFailure(format!("token signing failed: {e}")))?;

        let refresh_token = self
            .codec
            .issue(
                &self.config,
                TokenKind::Refresh,
                std::slice::from_ref(&subject_claim),
            )
            .map_err(|e| SessionError::PersistenceFailure(format!("token signing failed: {e}")))?;

        if self
            .store
            .find_refresh_session_by_token(&refresh_token)
            .await?
            .is_some()
        {
            tracing::error!(subject_id = %subject_id, "refresh token collision detected");
            return Err(SessionError::TokenCollision);
        }

        let now = Utc::now();
        let session = RefreshSession {
            token: refresh_token.clone(),
            subject_id: *subject_id,
            issued_at: now,
            expires_at: now + self.config.refresh_token_lifetime,
            revoked: false,
        };

        if !self.store.insert_refresh_session(session).await? {
            tracing::error!(subject_id = %subject_id, "refresh session insert not acknowledged");
            return Err(SessionError::PersistenceFailure(
                "refresh session insert not acknowledged".to_string(),
            ));
        }

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<CS> SessionServicePort for SessionService<CS>
where
    CS: CredentialStore,
{
    async fn sign_up(&self, email: &str, password: &str) -> Result<TokenPair, SessionError> {
        // Uniqueness is checked on the raw email before shape validation,
        // matching the operation ordering of the public contract.
        if self.store.find_credential_by_email(email).await?.is_some() {
            return Err(SessionError::EmailInUse(email.to_string()));
        }

        let email = EmailAddress::new(email.to_string())?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(SessionError::InvalidPasswordLength {
                min: MIN_PASSWORD_LENGTH,
                actual: password.len(),
            });
        }

        let salted = self
            .hashing
            .generate_salted_hash(password, HashingService::DEFAULT_SALT_LENGTH);

        let credential = Credential {
            subject_id: SubjectId::new(),
            email,
            password_hash: salted.hash,
            password_salt: salted.salt,
        };
        let subject_id = credential.subject_id;

        if !self.store.insert_credential(credential).await? {
            tracing::error!(subject_id = %subject_id, "credential insert not acknowledged");
            return Err(SessionError::PersistenceFailure(
                "credential insert not acknowledged".to_string(),
            ));
        }

        tracing::debug!(subject_id = %subject_id, "subject registered");
        self.issue_and_store(&subject_id).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenPair, SessionError> {
        let credential = self
            .store
            .find_credential_by_email(email)
            .await?
            .ok_or_else(|| SessionError::SubjectNotFound(email.to_string()))?;

        let salted = SaltedHash {
            hash: credential.password_hash.clone(),
            salt: credential.password_salt.clone(),
        };
        if !self.hashing.verify(password, &salted) {
            return Err(SessionError::InvalidCredential);
        }

        tracing::debug!(subject_id = %credential.subject_id, "subject authenticated");
        self.issue_and_store(&credential.subject_id).await
    }

    async fn sign_out(&self, refresh_token: &str) -> Result<(), SessionError> {
        if !self.store.revoke_refresh_session(refresh_token).await? {
            return Err(SessionError::InvalidRefreshToken(
                "no matching session".to_string(),
            ));
        }

        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        let validation = self.codec.verify(refresh_token, &self.config);
        if !validation.valid {
            return Err(SessionError::InvalidRefreshToken(
                "verification failed".to_string(),
            ));
        }

        let session = self
            .store
            .find_refresh_session_by_token(refresh_token)
            .await?
            .ok_or_else(|| SessionError::InvalidRefreshToken("session not found".to_string()))?;

        // The stored record is authoritative over the token's embedded
        // expiry.
        if !session.is_active(Utc::now()) {
            return Err(SessionError::InvalidRefreshToken(
                "session revoked or expired".to_string(),
            ));
        }

        // Single-use rotation: revoke before reissuing. A crash here leaves
        // the session unusable but never replayable.
        if !self.store.revoke_refresh_session(refresh_token).await? {
            return Err(SessionError::PersistenceFailure(
                "session revoke not acknowledged".to_string(),
            ));
        }

        let subject = validation
            .claims
            .get(SUBJECT_CLAIM)
            .ok_or_else(|| SessionError::InvalidRefreshToken("invalid payload".to_string()))?;
        let subject_id = SubjectId::from_string(subject)
            .map_err(|_| SessionError::InvalidRefreshToken("invalid payload".to_string()))?;

        tracing::debug!(subject_id = %subject_id, "refresh session rotated");
        self.issue_and_store(&subject_id).await
    }

    fn authorize(&self, access_token: &str) -> Result<SubjectId, SessionError> {
        self.guard.authorize(access_token, &self.config)
    }
}

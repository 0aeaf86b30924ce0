use async_trait::async_trait;

use crate::domain::session::models::Credential;
use crate::domain::session::models::RefreshSession;
use crate::domain::session::models::SubjectId;
use crate::domain::session::models::TokenPair;
use crate::session::errors::SessionError;

/// Port for session-lifecycle operations exposed to the transport layer.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Register a new subject and open a session.
    ///
    /// # Arguments
    /// * `email` - Raw email address
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Fresh access/refresh token pair
    ///
    /// # Errors
    /// * `EmailInUse` - A credential already exists for this email
    /// * `InvalidEmailFormat` - Email fails the shape check
    /// * `InvalidPasswordLength` - Password shorter than the minimum
    /// * `TokenCollision` - Freshly issued refresh token already stored
    /// * `PersistenceFailure` - Store did not acknowledge a write
    async fn sign_up(&self, email: &str, password: &str) -> Result<TokenPair, SessionError>;

    /// Authenticate an existing subject and open a session.
    ///
    /// # Arguments
    /// * `email` - Raw email address
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Fresh access/refresh token pair
    ///
    /// # Errors
    /// * `SubjectNotFound` - No credential for this email
    /// * `InvalidCredential` - Password does not match the stored digest
    /// * `TokenCollision` - Freshly issued refresh token already stored
    /// * `PersistenceFailure` - Store did not acknowledge a write
    async fn sign_in(&self, email: &str, password: &str) -> Result<TokenPair, SessionError>;

    /// Revoke a refresh session.
    ///
    /// # Arguments
    /// * `refresh_token` - Token identifying the session to revoke
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - No matching live session, or the revoke was
    ///   not acknowledged
    async fn sign_out(&self, refresh_token: &str) -> Result<(), SessionError>;

    /// Rotate a refresh session: revoke the presented token and issue a new
    /// pair. Refresh tokens are strictly single-use.
    ///
    /// # Arguments
    /// * `refresh_token` - Token to rotate
    ///
    /// # Returns
    /// Fresh access/refresh token pair
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Token malformed, unknown, revoked, expired,
    ///   or missing its subject claim
    /// * `TokenCollision` - Freshly issued refresh token already stored
    /// * `PersistenceFailure` - Store did not acknowledge a write
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError>;

    /// Validate an inbound access token and extract the subject identity.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token presented by the caller
    ///
    /// # Returns
    /// Subject identity for downstream authorization
    ///
    /// # Errors
    /// * `InvalidAccessToken` - Verification failed, wrong token type, or
    ///   missing/malformed subject claim
    fn authorize(&self, access_token: &str) -> Result<SubjectId, SessionError>;
}

/// Persistence contract for credential and refresh-session records.
///
/// The store owns all durable state and per-record mutual exclusion
/// (unique-index semantics on email and token fields). A duplicate-key
/// rejection is reported as an unacknowledged write (`Ok(false)`), never as
/// a silent overwrite.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a credential by email address.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `PersistenceFailure` - Store operation failed
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credential>, SessionError>;

    /// Persist a new credential.
    ///
    /// # Returns
    /// True if the write was acknowledged
    ///
    /// # Errors
    /// * `PersistenceFailure` - Store operation failed
    async fn insert_credential(&self, credential: Credential) -> Result<bool, SessionError>;

    /// Retrieve a refresh session by its exact token string.
    ///
    /// # Returns
    /// Optional session record (None if not found)
    ///
    /// # Errors
    /// * `PersistenceFailure` - Store operation failed
    async fn find_refresh_session_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshSession>, SessionError>;

    /// Persist a new refresh session.
    ///
    /// # Returns
    /// True if the write was acknowledged
    ///
    /// # Errors
    /// * `PersistenceFailure` - Store operation failed
    async fn insert_refresh_session(&self, session: RefreshSession)
        -> Result<bool, SessionError>;

    /// Mark the session with this token as revoked.
    ///
    /// # Returns
    /// True if a live session was found and revoked
    ///
    /// # Errors
    /// * `PersistenceFailure` - Store operation failed
    async fn revoke_refresh_session(&self, token: &str) -> Result<bool, SessionError>;
}

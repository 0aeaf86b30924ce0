use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::session::errors::EmailError;
use crate::session::errors::SubjectIdError;

/// Subject unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId(pub Uuid);

impl SubjectId {
    /// Generate a new random subject ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a subject ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, SubjectIdError> {
        Uuid::parse_str(s)
            .map(SubjectId)
            .map_err(|e| SubjectIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email shape using an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not have a valid `local@domain` shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored credential record.
///
/// Owned by the credential store; the core never caches it beyond a single
/// operation. The password digest is always salted, never raw.
#[derive(Debug, Clone)]
pub struct Credential {
    pub subject_id: SubjectId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub password_salt: String,
}

/// Stored refresh session record.
///
/// Append-then-revoke: created on issuance, mutated exactly once to set
/// `revoked = true` on sign-out or rotation, never edited otherwise. A token
/// string observed in the store is never reused for a second record.
#[derive(Debug, Clone)]
pub struct RefreshSession {
    pub token: String,
    pub subject_id: SubjectId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl RefreshSession {
    /// Whether the stored record still authorizes a rotation.
    ///
    /// The stored record is authoritative: a revoked or expired session
    /// rejects rotation even if the signed token's own expiry still looks
    /// valid under clock skew.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && self.expires_at >= now
    }
}

/// Access/refresh token pair returned by the session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_subject_id_roundtrip() {
        let id = SubjectId::new();
        let parsed = SubjectId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_subject_id_invalid_format() {
        let result = SubjectId::from_string("not-a-uuid");
        assert!(matches!(result, Err(SubjectIdError::InvalidFormat(_))));
    }

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("a@b.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@b.com");
    }

    #[test]
    fn test_email_address_invalid() {
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
        assert!(EmailAddress::new("@missing-local.com".to_string()).is_err());
        assert!(EmailAddress::new("missing-domain@".to_string()).is_err());
    }

    #[test]
    fn test_refresh_session_is_active() {
        let now = Utc::now();
        let session = RefreshSession {
            token: "token".to_string(),
            subject_id: SubjectId::new(),
            issued_at: now,
            expires_at: now + Duration::days(7),
            revoked: false,
        };

        assert!(session.is_active(now));
        assert!(session.is_active(session.expires_at));
        assert!(!session.is_active(session.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_revoked_session_is_not_active() {
        let now = Utc::now();
        let session = RefreshSession {
            token: "token".to_string(),
            subject_id: SubjectId::new(),
            issued_at: now,
            expires_at: now + Duration::days(7),
            revoked: true,
        };

        assert!(!session.is_active(now));
    }
}

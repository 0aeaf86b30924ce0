use thiserror::Error;

/// Error for SubjectId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubjectIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Stable machine-readable failure category.
///
/// The transport boundary maps these exhaustively to response statuses;
/// nothing beyond kind and message is surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmailInUse,
    InvalidEmailFormat,
    InvalidPasswordLength,
    SubjectNotFound,
    InvalidCredential,
    InvalidRefreshToken,
    InvalidAccessToken,
    TokenCollision,
    PersistenceFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmailInUse => "EMAIL_IN_USE",
            ErrorKind::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            ErrorKind::InvalidPasswordLength => "INVALID_PASSWORD_LENGTH",
            ErrorKind::SubjectNotFound => "SUBJECT_NOT_FOUND",
            ErrorKind::InvalidCredential => "INVALID_CREDENTIAL",
            ErrorKind::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            ErrorKind::InvalidAccessToken => "INVALID_ACCESS_TOKEN",
            ErrorKind::TokenCollision => "TOKEN_COLLISION",
            ErrorKind::PersistenceFailure => "PERSISTENCE_FAILURE",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error for all session-lifecycle operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    #[error("Invalid email: {0}")]
    InvalidEmailFormat(#[from] EmailError),

    #[error("Password must be at least {min} characters, got {actual}")]
    InvalidPasswordLength { min: usize, actual: usize },

    #[error("No account found for email: {0}")]
    SubjectNotFound(String),

    #[error("Invalid credentials")]
    InvalidCredential,

    #[error("Invalid refresh token: {0}")]
    InvalidRefreshToken(String),

    #[error("Invalid access token: {0}")]
    InvalidAccessToken(String),

    #[error("Generated token already exists in the store")]
    TokenCollision,

    #[error("Store did not acknowledge write: {0}")]
    PersistenceFailure(String),
}

impl SessionError {
    /// Stable category for boundary mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::EmailInUse(_) => ErrorKind::EmailInUse,
            SessionError::InvalidEmailFormat(_) => ErrorKind::InvalidEmailFormat,
            SessionError::InvalidPasswordLength { .. } => ErrorKind::InvalidPasswordLength,
            SessionError::SubjectNotFound(_) => ErrorKind::SubjectNotFound,
            SessionError::InvalidCredential => ErrorKind::InvalidCredential,
            SessionError::InvalidRefreshToken(_) => ErrorKind::InvalidRefreshToken,
            SessionError::InvalidAccessToken(_) => ErrorKind::InvalidAccessToken,
            SessionError::TokenCollision => ErrorKind::TokenCollision,
            SessionError::PersistenceFailure(_) => ErrorKind::PersistenceFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping_is_stable() {
        let error = SessionError::EmailInUse("a@b.com".to_string());
        assert_eq!(error.kind(), ErrorKind::EmailInUse);
        assert_eq!(error.kind().as_str(), "EMAIL_IN_USE");

        let error = SessionError::InvalidPasswordLength { min: 8, actual: 3 };
        assert_eq!(error.kind(), ErrorKind::InvalidPasswordLength);

        let error = SessionError::TokenCollision;
        assert_eq!(error.kind(), ErrorKind::TokenCollision);
    }

    #[test]
    fn test_email_error_converts_to_session_error() {
        let error: SessionError = EmailError::InvalidFormat("bad".to_string()).into();
        assert_eq!(error.kind(), ErrorKind::InvalidEmailFormat);
    }

    #[test]
    fn test_messages_carry_no_internal_detail() {
        let error = SessionError::InvalidRefreshToken("session not found".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid refresh token: session not found"
        );
    }
}

use auth::TokenCodec;
use auth::TokenConfig;
use auth::TokenKind;

use crate::domain::session::models::SubjectId;
use crate::session::errors::SessionError;

/// Claim name carrying the subject identity in every issued token.
pub const SUBJECT_CLAIM: &str = "sub";

/// Validates inbound access tokens and extracts the subject identity.
///
/// Rejects refresh tokens presented where an access token is required; the
/// `type` discriminator lives inside the signed payload, so a forged swap
/// fails signature verification first.
pub struct AccessGuard {
    codec: TokenCodec,
}

impl AccessGuard {
    pub fn new() -> Self {
        Self {
            codec: TokenCodec::new(),
        }
    }

    /// Validate an access token against issuer, audience, expiry, and type,
    /// returning the subject identity claim.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token presented by the caller
    /// * `config` - Token configuration to verify against
    ///
    /// # Errors
    /// * `InvalidAccessToken` - Verification failed, the `type` claim is not
    ///   `access`, or the subject claim is absent or malformed
    pub fn authorize(
        &self,
        access_token: &str,
        config: &TokenConfig,
    ) -> Result<SubjectId, SessionError> {
        let validation = self.codec.verify(access_token, config);
        if !validation.valid {
            tracing::warn!("access token failed verification");
            return Err(SessionError::InvalidAccessToken(
                "verification failed".to_string(),
            ));
        }

        if validation.claims.get("type").map(String::as_str) != Some(TokenKind::Access.as_str()) {
            tracing::warn!("non-access token presented to access guard");
            return Err(SessionError::InvalidAccessToken(
                "wrong token type".to_string(),
            ));
        }

        let subject = validation.claims.get(SUBJECT_CLAIM).ok_or_else(|| {
            SessionError::InvalidAccessToken("missing subject claim".to_string())
        })?;

        SubjectId::from_string(subject)
            .map_err(|_| SessionError::InvalidAccessToken("malformed subject claim".to_string()))
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenClaim;
    use chrono::Duration;

    use super::*;
    use crate::session::errors::ErrorKind;

    fn test_config() -> TokenConfig {
        TokenConfig::new(
            "test-issuer",
            "test-audience",
            "test_secret_key_at_least_32_bytes!",
            Duration::minutes(15),
            Duration::days(7),
        )
        .unwrap()
    }

    #[test]
    fn test_authorize_valid_access_token() {
        let config = test_config();
        let codec = TokenCodec::new();
        let guard = AccessGuard::new();

        let subject_id = SubjectId::new();
        let token = codec
            .issue(
                &config,
                TokenKind::Access,
                &[TokenClaim::new(SUBJECT_CLAIM, subject_id.to_string())],
            )
            .unwrap();

        let authorized = guard.authorize(&token, &config).unwrap();
        assert_eq!(authorized, subject_id);
    }

    #[test]
    fn test_authorize_rejects_refresh_token() {
        let config = test_config();
        let codec = TokenCodec::new();
        let guard = AccessGuard::new();

        let token = codec
            .issue(
                &config,
                TokenKind::Refresh,
                &[TokenClaim::new(SUBJECT_CLAIM, SubjectId::new().to_string())],
            )
            .unwrap();

        let result = guard.authorize(&token, &config);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidAccessToken);
    }

    #[test]
    fn test_authorize_rejects_garbage() {
        let config = test_config();
        let guard = AccessGuard::new();

        let result = guard.authorize("not.a.token", &config);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidAccessToken);
    }

    #[test]
    fn test_authorize_rejects_missing_subject() {
        let config = test_config();
        let codec = TokenCodec::new();
        let guard = AccessGuard::new();

        let token = codec.issue(&config, TokenKind::Access, &[]).unwrap();

        let result = guard.authorize(&token, &config);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidAccessToken);
    }

    #[test]
    fn test_authorize_rejects_malformed_subject() {
        let config = test_config();
        let codec = TokenCodec::new();
        let guard = AccessGuard::new();

        let token = codec
            .issue(
                &config,
                TokenKind::Access,
                &[TokenClaim::new(SUBJECT_CLAIM, "not-a-uuid")],
            )
            .unwrap();

        let result = guard.authorize(&token, &config);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidAccessToken);
    }

    #[test]
    fn test_authorize_rejects_foreign_audience() {
        let config = test_config();
        let other_config = TokenConfig::new(
            "test-issuer",
            "other-audience",
            "test_secret_key_at_least_32_bytes!",
            Duration::minutes(15),
            Duration::days(7),
        )
        .unwrap();
        let codec = TokenCodec::new();
        let guard = AccessGuard::new();

        let token = codec
            .issue(
                &other_config,
                TokenKind::Access,
                &[TokenClaim::new(SUBJECT_CLAIM, SubjectId::new().to_string())],
            )
            .unwrap();

        let result = guard.authorize(&token, &config);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidAccessToken);
    }
}

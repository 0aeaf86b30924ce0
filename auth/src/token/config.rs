use chrono::Duration;

use super::claims::TokenKind;
use super::errors::TokenConfigError;

/// Process-wide immutable token configuration.
///
/// Constructed once at startup from external configuration and passed by
/// reference to every issue/verify call; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub issuer: String,
    pub audience: String,
    pub secret: String,
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
}

impl TokenConfig {
    /// Access token lifetime used when the deployment does not override it.
    pub const DEFAULT_ACCESS_LIFETIME_MINUTES: i64 = 15;

    /// Refresh token lifetime used when the deployment does not override it.
    pub const DEFAULT_REFRESH_LIFETIME_DAYS: i64 = 7;

    /// Build a validated token configuration.
    ///
    /// # Arguments
    /// * `issuer` - Value stamped into and required from the `iss` claim
    /// * `audience` - Value stamped into and required from the `aud` claim
    /// * `secret` - HMAC signing key (at least 32 bytes recommended)
    /// * `access_token_lifetime` - Validity window for access tokens
    /// * `refresh_token_lifetime` - Validity window for refresh tokens
    ///
    /// # Errors
    /// * `EmptyField` - Issuer, audience, or secret is empty
    /// * `NonPositiveLifetime` - A lifetime is zero or negative
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        secret: impl Into<String>,
        access_token_lifetime: Duration,
        refresh_token_lifetime: Duration,
    ) -> Result<Self, TokenConfigError> {
        let issuer = issuer.into();
        let audience = audience.into();
        let secret = secret.into();

        if issuer.is_empty() {
            return Err(TokenConfigError::EmptyField("issuer"));
        }
        if audience.is_empty() {
            return Err(TokenConfigError::EmptyField("audience"));
        }
        if secret.is_empty() {
            return Err(TokenConfigError::EmptyField("secret"));
        }
        if access_token_lifetime <= Duration::zero() {
            return Err(TokenConfigError::NonPositiveLifetime(
                "access_token_lifetime",
            ));
        }
        if refresh_token_lifetime <= Duration::zero() {
            return Err(TokenConfigError::NonPositiveLifetime(
                "refresh_token_lifetime",
            ));
        }

        Ok(Self {
            issuer,
            audience,
            secret,
            access_token_lifetime,
            refresh_token_lifetime,
        })
    }

    /// Validity window for tokens of the given kind.
    pub fn lifetime_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_token_lifetime,
            TokenKind::Refresh => self.refresh_token_lifetime,
        }
    }
}

use std::collections::HashMap;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::claims::TokenClaim;
use super::claims::TokenKind;
use super::claims::TokenValidation;
use super::config::TokenConfig;
use super::errors::TokenError;

/// Signed token codec.
///
/// Stateless: signing and verification keys are derived per call from the
/// configuration's secret, so a single codec serves any number of
/// configurations. Uses HS256 (HMAC with SHA-256).
pub struct TokenCodec {
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec configured for HS256.
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token of the given kind.
    ///
    /// Stamps issuer, audience, a fresh unique token id, issued-at, an
    /// expiry of now plus the kind's configured lifetime, the `type`
    /// discriminator, and all caller claims. A caller claim named `sub` is
    /// written to the registered subject claim.
    ///
    /// # Arguments
    /// * `config` - Token configuration (issuer, audience, secret, lifetimes)
    /// * `kind` - Token type discriminator
    /// * `claims` - Caller claims to embed
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        config: &TokenConfig,
        kind: TokenKind,
        claims: &[TokenClaim],
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiry = now + config.lifetime_for(kind);

        let mut payload = Claims {
            sub: None,
            exp: Some(expiry.timestamp()),
            iat: Some(now.timestamp()),
            iss: Some(config.issuer.clone()),
            aud: Some(config.audience.clone()),
            jti: Some(Uuid::new_v4().to_string()),
            token_type: Some(kind.as_str().to_string()),
            extra: HashMap::new(),
        };

        for claim in claims {
            if claim.name == "sub" {
                payload.sub = Some(claim.value.clone());
            } else {
                payload
                    .extra
                    .insert(claim.name.clone(), serde_json::json!(claim.value));
            }
        }

        let header = Header::new(self.algorithm);
        encode(
            &header,
            &payload,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify an inbound token.
    ///
    /// Checks signature, issuer, audience, and expiry (no leeway). Total
    /// over arbitrary byte input: any failure, including a malformed token,
    /// yields an invalid result with an empty claim map rather than an
    /// error.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    /// * `config` - Token configuration to verify against
    pub fn verify(&self, token: &str, config: &TokenConfig) -> TokenValidation {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = 0;

        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => TokenValidation::valid(data.claims.into_string_map()),
            Err(_) => TokenValidation::invalid(),
        }
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Discriminator embedded in every signed token as the `type` claim.
///
/// Keeping the discriminator inside the signed payload (rather than using
/// separate signing keys) prevents presenting a refresh token where an
/// access token is required, and vice versa. Enforcement belongs to the
/// callers verifying the token, not to the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Claim value written into the `type` claim.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied (name, value) claim pair embedded in a signed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaim {
    pub name: String,
    pub value: String,
}

impl TokenClaim {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// JWT claims payload.
///
/// Standard RFC 7519 claims plus custom fields via the flattened `extra`
/// map. All standard fields are optional so arbitrary inbound tokens can be
/// deserialized for verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user/entity identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// JWT ID (unique token identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Token type discriminator (`access` | `refresh`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Additional custom fields (flattened into the token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Flatten the payload into a string-valued claim map.
    ///
    /// Registered string claims keep their value as-is; numeric claims are
    /// rendered in decimal; custom JSON values fall back to their compact
    /// JSON rendering when they are not plain strings.
    pub fn into_string_map(self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        if let Some(sub) = self.sub {
            map.insert("sub".to_string(), sub);
        }
        if let Some(exp) = self.exp {
            map.insert("exp".to_string(), exp.to_string());
        }
        if let Some(iat) = self.iat {
            map.insert("iat".to_string(), iat.to_string());
        }
        if let Some(iss) = self.iss {
            map.insert("iss".to_string(), iss);
        }
        if let Some(aud) = self.aud {
            map.insert("aud".to_string(), aud);
        }
        if let Some(jti) = self.jti {
            map.insert("jti".to_string(), jti);
        }
        if let Some(token_type) = self.token_type {
            map.insert("type".to_string(), token_type);
        }

        for (name, value) in self.extra {
            let rendered = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            map.insert(name, rendered);
        }

        map
    }
}

/// Outcome of verifying an inbound token.
///
/// Verification is a total function over arbitrary input: failures carry no
/// claims rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValidation {
    pub valid: bool,
    pub claims: HashMap<String, String>,
}

impl TokenValidation {
    pub fn valid(claims: HashMap<String, String>) -> Self {
        Self {
            valid: true,
            claims,
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            claims: HashMap::new(),
        }
    }
}

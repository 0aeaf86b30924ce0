use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Error type for token configuration construction.
///
/// Surfacing these at construction keeps every later issue/verify call free
/// of configuration failure modes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenConfigError {
    #[error("Token configuration field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("Token lifetime must be positive: {0}")]
    NonPositiveLifetime(&'static str),
}

//! Authentication primitives library
//!
//! Provides reusable authentication infrastructure for services:
//! - Salted password digests (SHA-256 with per-record random salt)
//! - Signed token issuance and verification (JWT, HS256)
//!
//! Each service composes these primitives with its own repositories and
//! domain rules. Nothing in this crate performs I/O beyond drawing entropy
//! from the OS random source.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::HashingService;
//!
//! let hashing = HashingService::new();
//! let salted = hashing.generate_salted_hash("my_password", HashingService::DEFAULT_SALT_LENGTH);
//! assert!(hashing.verify("my_password", &salted));
//! assert!(!hashing.verify("wrong_password", &salted));
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::{TokenClaim, TokenCodec, TokenConfig, TokenKind};
//! use chrono::Duration;
//!
//! let config = TokenConfig::new(
//!     "my-service",
//!     "my-clients",
//!     "secret_key_at_least_32_bytes_long!!!",
//!     Duration::minutes(15),
//!     Duration::days(7),
//! )
//! .unwrap();
//!
//! let codec = TokenCodec::new();
//! let token = codec
//!     .issue(&config, TokenKind::Access, &[TokenClaim::new("sub", "user123")])
//!     .unwrap();
//!
//! let validation = codec.verify(&token, &config);
//! assert!(validation.valid);
//! assert_eq!(validation.claims.get("sub").map(String::as_str), Some("user123"));
//! ```

pub mod hashing;
pub mod token;

// Re-export commonly used items
pub use hashing::HashingService;
pub use hashing::SaltedHash;
pub use token::Claims;
pub use token::TokenClaim;
pub use token::TokenCodec;
pub use token::TokenConfig;
pub use token::TokenConfigError;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenValidation;

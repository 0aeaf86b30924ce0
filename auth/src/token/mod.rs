pub mod claims;
pub mod codec;
pub mod config;
pub mod errors;

pub use claims::Claims;
pub use claims::TokenClaim;
pub use claims::TokenKind;
pub use claims::TokenValidation;
pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use errors::TokenConfigError;
pub use errors::TokenError;

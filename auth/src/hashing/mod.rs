pub mod sha256;

pub use sha256::HashingService;
pub use sha256::SaltedHash;

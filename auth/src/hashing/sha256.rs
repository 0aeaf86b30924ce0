use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Digest;
use sha2::Sha256;

/// Password digest combined with its per-record random salt.
///
/// Both fields are hex-encoded; the salt string is twice as long as the raw
/// salt byte length. The digest is never stored or transmitted unsalted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaltedHash {
    pub hash: String,
    pub salt: String,
}

/// Salted password hashing implementation.
///
/// Computes `SHA-256(salt ++ value)` over the hex-encoded salt, with the
/// salt drawn from the OS cryptographically secure random source.
pub struct HashingService;

impl HashingService {
    /// Salt byte length used when the caller has no reason to pick another.
    pub const DEFAULT_SALT_LENGTH: usize = 32;

    /// Create a new hashing service instance.
    pub fn new() -> Self {
        Self
    }

    /// Derive a salted digest for a plaintext value.
    ///
    /// # Arguments
    /// * `value` - Plaintext to digest
    /// * `salt_length` - Number of random salt bytes to draw
    ///
    /// # Returns
    /// SaltedHash with hex-encoded digest and salt
    pub fn generate_salted_hash(&self, value: &str, salt_length: usize) -> SaltedHash {
        let mut salt_bytes = vec![0u8; salt_length];
        OsRng.fill_bytes(&mut salt_bytes);
        let salt = hex::encode(salt_bytes);
        let hash = Self::digest(&salt, value);

        SaltedHash { hash, salt }
    }

    /// Verify a plaintext value against a stored salted digest.
    ///
    /// # Arguments
    /// * `value` - Plaintext to verify
    /// * `salted_hash` - Stored digest and salt
    ///
    /// # Returns
    /// True if the recomputed digest matches, false otherwise
    pub fn verify(&self, value: &str, salted_hash: &SaltedHash) -> bool {
        Self::digest(&salted_hash.salt, value) == salted_hash.hash
    }

    fn digest(salt: &str, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(value.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl Default for HashingService {
    fn default() -> Self {
        Self::new()
    }
}

use sha2::{Digest, Sha256};

/// Hash a password with unsalted SHA-256, hex encoded.
///
/// Identical passwords produce identical digests. The stored user files and
/// the built-in admin table both depend on this exact format.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a password against a stored hex digest
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}

//! bcrypt password hashing and verification.

use bcrypt::BcryptError;

/// Hash a plaintext password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}

//! Credential module - bcrypt password hashing

/// bcrypt work factor used for every new hash
pub const HASH_COST: u32 = bcrypt::DEFAULT_COST;

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// Verify a password against a stored hash.
///
/// A malformed hash never matches: the parse error is logged and `false`
/// is returned.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            log::warn!("Password verification failed on malformed hash: {}", e);
            false
        }
    }
}

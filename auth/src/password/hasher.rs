use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2Hasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way password hasher.
///
/// Uses Argon2id with a fresh random salt per call, so two digests of the
/// same password differ while both verify correctly. The work factor is a
/// fixed source constant (Argon2's defaults), not runtime configuration.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// Returns the digest in PHC string format (algorithm, parameters, salt,
    /// and hash all encoded together).
    ///
    /// # Errors
    /// * `HashingFailed` - the underlying primitive errored; not expected
    ///   under normal conditions and treated as fatal by callers
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored digest.
    ///
    /// A mismatch is `Ok(false)`, never an error; comparison is delegated to
    /// the primitive, which is constant-time over the hash bytes.
    ///
    /// # Errors
    /// * `MalformedDigest` - the stored digest is not a parseable PHC string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::MalformedDigest(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

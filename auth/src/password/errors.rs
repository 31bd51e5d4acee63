use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error: `verify` reports that as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password digest is malformed: {0}")]
    MalformedDigest(String),
}

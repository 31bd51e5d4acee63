use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures collapse into two cases on purpose: `Expired` (so
/// the caller can tell the user to log in again) and `Invalid` for everything
/// else. Whether a token was malformed, tampered with, or signed with the
/// wrong key is never exposed to callers; the underlying cause is logged for
/// operators only.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of an access token.
///
/// Carries a stable user identifier plus the email as a diagnostic hint.
/// Deliberately excludes the user's role: the access gate re-reads the user
/// record on every request, so a role change takes effect without waiting for
/// token expiry. It goes without saying that the password digest never
/// appears here either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: the user's unique identifier
    pub sub: String,

    /// Email address of the subject, for operator diagnostics only
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for a user, stamping issuance now and expiry after
    /// `ttl_seconds`.
    pub fn new(user_id: impl ToString, email: impl ToString, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }
}

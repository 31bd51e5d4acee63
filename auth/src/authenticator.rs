use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::AccessClaims;
use crate::token::TokenError;
use crate::token::TokenSigner;

/// Coordinates password verification and token issuance.
///
/// The account service constructs one of these at startup from the
/// configured signing secret and passes it (never reads it globally) into
/// the login handlers and the access gate.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_signer: TokenSigner,
}

/// Errors from the combined authentication flow.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Password did not match the stored digest. Callers must present this
    /// identically to an unknown account, to avoid a user-existence oracle.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl Authenticator {
    pub fn new(signing_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_signer: TokenSigner::new(signing_secret),
        }
    }

    /// Hash a password for storage (signup, password reset).
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored digest and, on success, mint an
    /// access token carrying `claims`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - password does not match
    /// * `Password` - the stored digest was malformed
    /// * `Token` - signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_digest: &str,
        claims: AccessClaims,
    ) -> Result<String, AuthError> {
        if !self.password_hasher.verify(password, stored_digest)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.token_signer.issue(&claims)?)
    }

    /// Mint a token without verifying a password.
    ///
    /// Used at signup, where the caller has just created the account.
    pub fn issue_token(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        self.token_signer.issue(claims)
    }

    /// Verify a token's signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.token_signer.verify(token)
    }
}

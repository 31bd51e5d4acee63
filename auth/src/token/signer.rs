use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Issues and verifies signed access tokens.
///
/// HMAC-SHA256 over the serialized claims. The signing secret is captured
/// once at construction and treated as immutable configuration; its absence
/// is a startup configuration error, never handled per-request.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenSigner {
    /// Create a signer from the signing secret.
    ///
    /// The secret should be at least 32 bytes for HS256 and must come from
    /// configuration, never from source.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a token string.
    ///
    /// # Errors
    /// * `SigningFailed` - serialization or signing failed; not expected
    ///   under normal conditions
    pub fn issue(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `Expired` - signature is good but the token is past its expiry
    /// * `Invalid` - any other failure (malformed, tampered, wrong key);
    ///   the distinction is logged, not returned
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => {
                    tracing::debug!(cause = %e, "Token verification failed");
                    TokenError::Invalid
                }
            })
    }
}

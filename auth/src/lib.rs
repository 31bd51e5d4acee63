//! Authentication building blocks for the storefront services.
//!
//! Provides the pieces the account service composes into its login flow:
//! - Password hashing and verification (Argon2id)
//! - Signed, time-limited access tokens (JWT, HS256)
//! - An `Authenticator` coordinating the two
//!
//! Everything here is pure computation over its inputs plus an immutable
//! signing secret; there is no I/O and no shared mutable state, so values can
//! be shared freely across request handlers.
//!
//! # Examples
//!
//! ```
//! use auth::{AccessClaims, Authenticator};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Signup: hash the password for storage
//! let digest = auth.hash_password("correct horse battery").unwrap();
//!
//! // Login: verify the password and mint a token
//! let claims = AccessClaims::new("user-42", "user@example.com", 3600);
//! let token = auth.authenticate("correct horse battery", &digest, claims).unwrap();
//!
//! // Later: verify the token
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.sub, "user-42");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

pub use authenticator::AuthError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenSigner;

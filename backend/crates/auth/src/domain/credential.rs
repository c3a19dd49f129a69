//! Credential Verification
//!
//! The admin credential check sits behind a trait so it can be replaced by a
//! server-side check without touching session handling.

use kernel::email::Email;

use crate::error::AuthResult;

/// Credential verifier trait
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    /// Return the normalized admin email when both inputs match.
    ///
    /// Every mismatch is `AuthError::InvalidCredentials`, without saying which
    /// input was wrong.
    async fn verify(&self, email: &str, password: &str) -> AuthResult<Email>;
}

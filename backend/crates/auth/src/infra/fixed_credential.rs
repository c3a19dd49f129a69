//! Fixed Admin Credential
//!
//! One configured admin email and the rolling checksum of its password.

use kernel::email::Email;
use platform::checksum::matches_checksum;
use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::domain::credential::CredentialVerifier;
use crate::error::{AuthError, AuthResult};

/// Verifier for the single configured admin
#[derive(Debug, Clone)]
pub struct FixedCredentialVerifier {
    admin_email: String,
    password_checksum: String,
}

impl FixedCredentialVerifier {
    pub fn new(admin_email: impl AsRef<str>, password_checksum: impl Into<String>) -> Self {
        Self {
            admin_email: normalize_email(admin_email.as_ref()),
            password_checksum: password_checksum.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.admin_email, config.admin_password_checksum.clone())
    }

    fn check(&self, email: &str, password: &str) -> bool {
        // Both comparisons always run
        let email_ok = constant_time_eq(
            normalize_email(email).as_bytes(),
            self.admin_email.as_bytes(),
        );
        let password_ok = matches_checksum(password, &self.password_checksum);
        email_ok & password_ok
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl CredentialVerifier for FixedCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> AuthResult<Email> {
        if !self.check(email, password) {
            return Err(AuthError::InvalidCredentials);
        }
        Email::new(&self.admin_email).map_err(|_| AuthError::InvalidCredentials)
    }
}

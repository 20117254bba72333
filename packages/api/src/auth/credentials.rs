//! # Credential verification
//!
//! The dashboard accepts exactly one account. [`CredentialVerifier`] keeps that
//! check behind an interface so handlers never see the configured secret, and
//! [`StaticCredentials`] is its only implementation: a comparison against the
//! `admin.username` / `admin.password` settings that takes the same time for
//! every input of a given length.

use subtle::ConstantTimeEq;

use crate::settings::Admin;

/// Decides whether a submitted username/password pair unlocks the dashboard.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single configured account.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&Admin> for StaticCredentials {
    fn from(admin: &Admin) -> Self {
        Self::new(admin.username.clone(), admin.password.clone())
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Evaluate both comparisons so a wrong username costs as much as a wrong password.
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        (user_ok & password_ok).into()
    }
}

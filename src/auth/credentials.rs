//! The single email and password pair that may log in.
//!
//! The password is salted and hashed with bcrypt when the server starts, so
//! only the hash is kept in memory.

use bcrypt::{hash, verify};

use crate::Error;

/// The email used when `DASHBOARD_EMAIL` is not set.
pub const DEMO_EMAIL: &str = "admin@example.com";
/// The password used when `DASHBOARD_PASSWORD` is not set.
pub const DEMO_PASSWORD: &str = "admin123";

/// The email and hashed password accepted by the log-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password_hash: String,
}

impl Credentials {
    /// An alias for the default bcrypt cost for hashing passwords.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Create the credential pair that the log-in form accepts, hashing
    /// `password` with the specified `cost`.
    ///
    /// `cost` increases the rounds of hashing and therefore the time needed
    /// to verify a password. Pass in [Credentials::DEFAULT_COST] to use the
    /// recommended cost.
    ///
    /// # Errors
    ///
    /// Returns [Error::HashingError] if the password could not be hashed.
    pub fn new(email: impl Into<String>, password: &str, cost: u32) -> Result<Self, Error> {
        let password_hash = hash(password, cost).map_err(|error| {
            tracing::error!("Could not hash the log-in password: {error}");
            Error::HashingError(error.to_string())
        })?;

        Ok(Self {
            email: email.into(),
            password_hash,
        })
    }

    /// Whether `email` matches exactly and `password` matches the stored hash.
    ///
    /// The password is checked even when the email is wrong.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let password_matches = verify(password, &self.password_hash).unwrap_or_else(|error| {
            tracing::error!("Could not verify the log-in password: {error}");
            false
        });

        (self.email == email) & password_matches
    }
}

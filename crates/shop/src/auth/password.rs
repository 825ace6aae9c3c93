//! Password hashing and activation tokens.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::{OsRng, RngCore};
use tracing::{error, instrument};

use super::AuthError;

/// Hashes `password` with Argon2 defaults and a fresh random salt.
#[instrument(skip_all)]
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "Password hashing failed");
            AuthError::Hashing(e.to_string())
        })
}

/// Checks `password` against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`; only a malformed hash or an internal failure is
/// an error.
#[instrument(skip_all)]
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        error!(error = %e, "Stored password hash is malformed");
        AuthError::Hashing(e.to_string())
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => {
            error!(error = %e, "Password verification failed");
            Err(AuthError::Hashing(e.to_string()))
        }
    }
}

/// 32 random bytes, hex encoded.
pub fn activation_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

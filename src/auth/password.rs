use sha2::{Digest, Sha256};

use crate::errors::{AppError, AppResult};

/// bcrypt over a SHA-256 pre-hash of the password.
///
/// bcrypt only reads the first 72 bytes of its input. Digesting first turns any
/// password into a fixed 64-character hex string, so long passwords keep every
/// byte significant. The salt is random per hash and travels inside the
/// verifier string.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(pre_hash(password), self.cost)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    }

    /// A malformed verifier counts as a mismatch.
    pub fn verify(&self, password: &str, verifier: &str) -> bool {
        match bcrypt::verify(pre_hash(password), verifier) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("Password verifier could not be checked: {}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

fn pre_hash(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

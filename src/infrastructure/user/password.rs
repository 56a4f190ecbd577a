//! Password digests using unsalted SHA-256
//!
//! Digests are 64 lowercase hex characters, byte-for-byte compatible with
//! records written by earlier deployments. No per-user salt is applied.

use sha2::{Digest, Sha256};
use std::fmt::Debug;

/// Length of a hex-encoded password digest
pub const DIGEST_HEX_LENGTH: usize = 64;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password into its stored digest form
    fn hash(&self, password: &str) -> String;

    /// Verify a password against a stored digest
    fn verify(&self, password: &str, digest: &str) -> bool;
}

/// SHA-256 password hasher
#[derive(Debug, Clone, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    /// Create a new SHA-256 hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn verify(&self, password: &str, digest: &str) -> bool {
        self.hash(password) == digest
    }
}

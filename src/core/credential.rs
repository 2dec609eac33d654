//! PIN credential storage and verification
//!
//! A [`Credential`] is what a client record holds in place of the raw PIN.
//! Callers only ever ask "does this PIN match?", so the storage mode can
//! change without touching the client or account contracts.

use crate::types::Pin;
use clap::ValueEnum;
use sha2::{Digest, Sha256};
use std::fmt;
use uuid::Uuid;

/// Length of the random salt used by [`Credential::Salted`]
pub const SALT_LEN: usize = 16;

/// How a PIN is held in memory
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CredentialStorage {
    /// Store the PIN value and compare directly
    #[default]
    Plain,
    /// Store SHA-256(salt || PIN digits) with a random per-credential salt
    Salted,
}

/// Stored PIN credential
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Plain(Pin),
    Salted {
        salt: [u8; SALT_LEN],
        digest: [u8; 32],
    },
}

impl Credential {
    /// Store `pin` using the requested storage mode
    ///
    /// Salted credentials draw a fresh random salt on every call.
    pub fn new(pin: Pin, storage: CredentialStorage) -> Self {
        match storage {
            CredentialStorage::Plain => Credential::Plain(pin),
            CredentialStorage::Salted => Self::with_salt(pin, Uuid::new_v4().into_bytes()),
        }
    }

    /// Store `pin` as a salted digest with a caller-chosen salt
    pub fn with_salt(pin: Pin, salt: [u8; SALT_LEN]) -> Self {
        Credential::Salted {
            salt,
            digest: salted_digest(&salt, pin),
        }
    }

    /// Check a candidate PIN against the stored credential
    pub fn verify(&self, candidate: Pin) -> bool {
        match self {
            Credential::Plain(pin) => *pin == candidate,
            Credential::Salted { salt, digest } => salted_digest(salt, candidate) == *digest,
        }
    }

    /// The storage mode this credential was created with
    pub fn storage(&self) -> CredentialStorage {
        match self {
            Credential::Plain(_) => CredentialStorage::Plain,
            Credential::Salted { .. } => CredentialStorage::Salted,
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Plain(_) => f.write_str("Credential::Plain(..)"),
            Credential::Salted { .. } => f.write_str("Credential::Salted(..)"),
        }
    }
}

fn salted_digest(salt: &[u8; SALT_LEN], pin: Pin) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(pin.value().to_string().as_bytes());
    hasher.finalize().into()
}

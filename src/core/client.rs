//! Client identity and authentication record

use super::credential::{Credential, CredentialStorage};
use crate::types::{ClientId, Pin};
use chrono::NaiveDate;

/// A bank client
///
/// Holds the identity fields and the stored PIN credential. The mutable
/// profile fields (names, date of birth, PIN) only change together through
/// [`Client::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    id: ClientId,
    last_name: String,
    first_name: String,
    date_of_birth: NaiveDate,
    credential: Credential,
    date_joined: NaiveDate,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `id` - Client identifier
    /// * `last_name` / `first_name` - Client name
    /// * `date_of_birth` - Date of birth
    /// * `pin` - PIN used to authorise balance-revealing operations
    /// * `date_joined` - Date the client joined the bank
    /// * `storage` - How the PIN is held in memory
    pub fn new(
        id: ClientId,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        pin: Pin,
        date_joined: NaiveDate,
        storage: CredentialStorage,
    ) -> Self {
        Client {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            date_of_birth,
            credential: Credential::new(pin, storage),
            date_joined,
        }
    }

    /// Replace name, date of birth and PIN in one step
    ///
    /// The new PIN keeps the storage mode of the old credential.
    pub fn update(
        &mut self,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        pin: Pin,
    ) {
        let credential = Credential::new(pin, self.credential.storage());
        self.last_name = last_name.into();
        self.first_name = first_name.into();
        self.date_of_birth = date_of_birth;
        self.credential = credential;
        tracing::info!(client = self.id, "client profile updated");
    }

    pub fn verify_pin(&self, pin: Pin) -> bool {
        self.credential.verify(pin)
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn date_joined(&self) -> NaiveDate {
        self.date_joined
    }

    pub fn credential_storage(&self) -> CredentialStorage {
        self.credential.storage()
    }
}

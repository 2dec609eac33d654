//! Session configuration
//!
//! A `SessionConfig` describes the client and account a session starts with,
//! plus the behaviour switches (deposit policy, credential storage, PIN input
//! mode). The default reproduces the stock demo session.

use crate::core::{Account, Client, CredentialStorage, DepositPolicy};
use crate::io::PinInputMode;
use crate::types::{ClientId, Pin};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::warn;

/// Account type used when none (or a blank one) is configured
pub const DEFAULT_ACCOUNT_TYPE: &str = "Savings";

/// Everything needed to build the session's client and account
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub client_id: ClientId,
    pub last_name: String,
    pub first_name: String,
    pub date_of_birth: NaiveDate,
    pub pin: Pin,
    pub date_joined: NaiveDate,
    pub account_type: String,
    pub starting_balance: Decimal,
    pub deposit_policy: DepositPolicy,
    pub credential_storage: CredentialStorage,
    pub pin_input: PinInputMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            client_id: 1,
            last_name: "Boszko".to_string(),
            first_name: "Tom".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1982, 7, 3).unwrap_or_default(),
            pin: Pin::new(1234),
            date_joined: Local::now().date_naive(),
            account_type: DEFAULT_ACCOUNT_TYPE.to_string(),
            starting_balance: Decimal::new(1000, 0),
            deposit_policy: DepositPolicy::Open,
            credential_storage: CredentialStorage::Plain,
            pin_input: PinInputMode::Masked,
        }
    }
}

impl SessionConfig {
    /// Replace invalid values with safe ones, warning about each
    ///
    /// - A negative starting balance becomes zero
    /// - A blank account type becomes [`DEFAULT_ACCOUNT_TYPE`]
    pub fn sanitized(mut self) -> Self {
        if self.starting_balance < Decimal::ZERO {
            warn!("Negative starting balance, using 0");
            self.starting_balance = Decimal::ZERO;
        }

        let account_type = self.account_type.trim();
        if account_type.is_empty() {
            warn!(
                "Empty account type, using default ({})",
                DEFAULT_ACCOUNT_TYPE
            );
            self.account_type = DEFAULT_ACCOUNT_TYPE.to_string();
        } else if account_type.len() != self.account_type.len() {
            self.account_type = account_type.to_string();
        }

        self
    }

    /// Build the client and its account
    pub fn build_account(&self) -> Account {
        let client = Client::new(
            self.client_id,
            self.last_name.clone(),
            self.first_name.clone(),
            self.date_of_birth,
            self.pin,
            self.date_joined,
            self.credential_storage,
        );
        Account::with_policy(
            client,
            self.account_type.clone(),
            self.starting_balance,
            self.deposit_policy,
        )
    }
}

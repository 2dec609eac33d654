//! Account state and PIN-gated balance operations
//!
//! This module provides the `Account` struct, which owns exactly one
//! [`Client`] and a monetary balance. The account is responsible for:
//! - Verifying the client's PIN before revealing or decreasing the balance
//! - Applying deposits and withdrawals with checked decimal arithmetic
//! - Producing the summary shown by the `info` action
//!
//! Every call is authenticated on its own. There is no session, no attempt
//! counter and no lockout.

use super::client::Client;
use crate::types::{BankError, Pin};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Whether deposits must present the client's PIN
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepositPolicy {
    /// Deposits are accepted without authentication
    #[default]
    Open,
    /// Deposits must go through [`Account::deposit_with_pin`]
    PinRequired,
}

/// Read-only view of the client and account, as shown by `info`
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub date_joined: NaiveDate,
    pub account_type: String,
    pub balance: Decimal,
}

/// A single bank account owned by one client
///
/// The balance is private: it is read through [`Account::check_balance`] and
/// changed only through deposits and withdrawals.
#[derive(Debug, Clone)]
pub struct Account {
    client: Client,
    balance: Decimal,
    account_type: String,
    deposit_policy: DepositPolicy,
}

impl Account {
    /// Create an account with open (unauthenticated) deposits
    ///
    /// # Arguments
    ///
    /// * `client` - The owning client; never replaced afterwards
    /// * `account_type` - Free-form label such as "Savings" or "Checking"
    /// * `starting_balance` - Initial balance
    pub fn new(client: Client, account_type: impl Into<String>, starting_balance: Decimal) -> Self {
        Self::with_policy(client, account_type, starting_balance, DepositPolicy::Open)
    }

    /// Create an account with an explicit deposit policy
    pub fn with_policy(
        client: Client,
        account_type: impl Into<String>,
        starting_balance: Decimal,
        deposit_policy: DepositPolicy,
    ) -> Self {
        Account {
            client,
            balance: starting_balance,
            account_type: account_type.into(),
            deposit_policy,
        }
    }

    /// Verify `pin` against the owning client's credential
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidPin` on mismatch.
    pub fn authenticate(&self, pin: Pin) -> Result<(), BankError> {
        if self.client.verify_pin(pin) {
            Ok(())
        } else {
            warn!(client = self.client.id(), "PIN verification failed");
            Err(BankError::InvalidPin)
        }
    }

    /// Return the current balance if `pin` matches
    ///
    /// All balance-revealing operations go through this method.
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidPin` on mismatch.
    pub fn check_balance(&self, pin: Pin) -> Result<Decimal, BankError> {
        self.authenticate(pin)?;
        Ok(self.balance)
    }

    /// Add `amount` to the balance without authentication
    ///
    /// The amount is not validated: a negative deposit decreases the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account's policy is `DepositPolicy::PinRequired`
    /// - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if self.deposit_policy == DepositPolicy::PinRequired {
            return Err(BankError::PinRequired);
        }
        self.apply_deposit(amount)
    }

    /// Verify `pin`, then add `amount` to the balance
    ///
    /// Accepted under either deposit policy.
    pub fn deposit_with_pin(&mut self, amount: Decimal, pin: Pin) -> Result<(), BankError> {
        self.authenticate(pin)?;
        self.apply_deposit(amount)
    }

    fn apply_deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit"))?;

        debug!(client = self.client.id(), "deposit applied");
        Ok(())
    }

    /// Withdraw `amount` if `pin` matches and funds are sufficient
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The amount was subtracted
    /// * `Ok(false)` - Insufficient funds; the balance is unchanged
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The PIN does not match (`BankError::InvalidPin`)
    /// - Subtracting the amount would overflow
    pub fn withdraw(&mut self, amount: Decimal, pin: Pin) -> Result<bool, BankError> {
        self.authenticate(pin)?;

        if self.balance < amount {
            debug!(client = self.client.id(), "withdrawal declined: insufficient funds");
            return Ok(false);
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;

        debug!(client = self.client.id(), "withdrawal applied");
        Ok(true)
    }

    /// Client and account details together with the balance
    ///
    /// # Errors
    ///
    /// Returns `BankError::InvalidPin` on mismatch.
    pub fn summary(&self, pin: Pin) -> Result<AccountSummary, BankError> {
        let balance = self.check_balance(pin)?;
        Ok(AccountSummary {
            full_name: self.client.full_name(),
            date_of_birth: self.client.date_of_birth(),
            date_joined: self.client.date_joined(),
            account_type: self.account_type.clone(),
            balance,
        })
    }

    /// Replace the owning client's name, date of birth and PIN
    ///
    /// Delegates to [`Client::update`]; the client itself is never swapped.
    pub fn update_client(
        &mut self,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        date_of_birth: NaiveDate,
        pin: Pin,
    ) {
        self.client.update(last_name, first_name, date_of_birth, pin);
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    pub fn deposit_policy(&self) -> DepositPolicy {
        self.deposit_policy
    }
}

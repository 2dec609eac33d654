//! PIN Bank Library
//! # Overview
//!
//! This library models a single client holding a single bank account, with
//! balance inspection and withdrawals gated by the client's PIN, and provides
//! the interactive console shell built on top of it.
//!
//! # Architecture
//!
//! - [`types`] - Core value types (Pin, ClientId) and error types
//! - [`core`] - Business logic, free of I/O:
//!   - [`core::credential`] - PIN storage (plain or salted SHA-256) and verification
//!   - [`core::client`] - Client identity record and atomic profile update
//!   - [`core::account`] - PIN-gated balance, deposit and withdrawal
//! - [`config`] - Session configuration and its defaults
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Console prompting, masked PIN entry and text formatting
//! - [`shell`] - The interactive action loop
//!
//! # Operations
//!
//! - **Check balance**: returns the balance if the PIN matches
//! - **Deposit**: adds to the balance; no PIN unless the account's deposit
//!   policy requires one
//! - **Withdraw**: requires the PIN; returns `false` on insufficient funds
//! - **Update**: replaces the client's name, date of birth and PIN together
//!
//! # Authentication
//!
//! Every operation is authenticated independently. There is no lockout and no
//! attempt counter; a wrong PIN yields `BankError::InvalidPin` and the caller
//! decides what to do next.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use crate::config::SessionConfig;
pub use crate::core::{Account, AccountSummary, Client, Credential, CredentialStorage, DepositPolicy};
pub use crate::shell::Shell;
pub use crate::types::{BankError, ClientId, InputError, Pin};

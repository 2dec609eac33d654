//! Core business logic module
//!
//! This module contains the account model and its PIN-gated rules:
//! - `credential` - PIN storage and verification (plain or salted hash)
//! - `client` - Client identity record and atomic profile update
//! - `account` - Balance operations gated by PIN verification
//!
//! Nothing in here performs I/O.

pub mod account;
pub mod client;
pub mod credential;

pub use account::{Account, AccountSummary, DepositPolicy};
pub use client::Client;
pub use credential::{Credential, CredentialStorage};

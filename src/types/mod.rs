//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `pin`: the numeric PIN credential value
//! - `error`: error types for the account core and the console layer

pub mod error;
pub mod pin;

pub use error::{BankError, InputError};
pub use pin::Pin;

/// Client identifier
pub type ClientId = u32;

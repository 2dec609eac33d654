//! Error types for the PIN bank
//!
//! Two families of errors exist:
//!
//! - [`BankError`]: raised by the account core. Authentication failures and
//!   arithmetic failures. Insufficient funds is deliberately *not* an error;
//!   `Account::withdraw` reports it as `Ok(false)`.
//! - [`InputError`]: raised by the console layer while reading and parsing
//!   user input. Parse failures are recoverable (the shell re-prompts), I/O
//!   failures are fatal to the session.

use thiserror::Error;

/// Errors produced by account and client operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// The supplied PIN does not match the stored credential
    ///
    /// Every balance-revealing or balance-decreasing operation fails with
    /// this error on a mismatch. There is no lockout; the caller may retry.
    #[error("Invalid PIN.")]
    InvalidPin,

    /// A deposit was attempted without a PIN while the account requires one
    #[error("This account requires PIN verification for deposits.")]
    PinRequired,

    /// Checked decimal arithmetic failed
    ///
    /// The balance is left unchanged.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl BankError {
    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

/// Errors produced while reading and parsing console input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Reading from or writing to the terminal failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The input stream was closed, or PIN entry was cancelled
    #[error("End of input")]
    EndOfInput,

    /// The action keyword was not recognised
    #[error("Invalid option. Please choose deposit, withdraw, info, update, or quit.")]
    UnknownAction {
        /// The keyword as typed
        action: String,
    },

    /// The amount could not be parsed as a decimal number
    #[error("Invalid amount '{input}'. Please enter a number such as 250.50.")]
    InvalidAmount {
        /// The rejected input
        input: String,
    },

    /// The amount parsed but is zero or negative
    #[error("Amount must be greater than zero, got {input}.")]
    NonPositiveAmount {
        /// The rejected input
        input: String,
    },

    /// The amount has more than two decimal places
    #[error("Amount can have at most two decimal places, got {input}.")]
    AmountTooPrecise {
        /// The rejected input
        input: String,
    },

    /// The date could not be parsed
    #[error("Invalid date '{input}'. Please use the format YYYY-MM-DD.")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// The PIN is empty, contains non-digits, or is too long
    #[error("PIN must be numeric.")]
    InvalidPin,

    /// A required text field was left blank
    #[error("{field} must not be empty.")]
    EmptyField {
        /// Human readable name of the field
        field: String,
    },
}

impl InputError {
    /// Whether the shell should re-prompt instead of ending the session
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, InputError::Io { .. } | InputError::EndOfInput)
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        InputError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(input: &str) -> Self {
        InputError::NonPositiveAmount {
            input: input.to_string(),
        }
    }

    /// Create an AmountTooPrecise error
    pub fn amount_too_precise(input: &str) -> Self {
        InputError::AmountTooPrecise {
            input: input.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(input: &str) -> Self {
        InputError::InvalidDate {
            input: input.to_string(),
        }
    }

    /// Create an UnknownAction error
    pub fn unknown_action(action: &str) -> Self {
        InputError::UnknownAction {
            action: action.to_string(),
        }
    }

    /// Create an EmptyField error
    pub fn empty_field(field: &str) -> Self {
        InputError::EmptyField {
            field: field.to_string(),
        }
    }
}

// Conversion from io::Error to InputError
impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::Io {
            message: error.to_string(),
        }
    }
}

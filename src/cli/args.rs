use crate::config::SessionConfig;
use crate::core::{CredentialStorage, DepositPolicy};
use crate::io::PinInputMode;
use crate::types::{ClientId, Pin};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use rust_decimal::Decimal;

/// Interactive PIN-protected bank account console
#[derive(Parser, Debug)]
#[command(name = "pin-bank")]
#[command(about = "Interactive PIN-protected bank account console", long_about = None)]
pub struct CliArgs {
    /// Client identifier
    #[arg(long = "client-id", value_name = "ID")]
    pub client_id: Option<ClientId>,

    /// Client last name
    #[arg(long = "last-name", value_name = "NAME")]
    pub last_name: Option<String>,

    /// Client first name
    #[arg(long = "first-name", value_name = "NAME")]
    pub first_name: Option<String>,

    /// Client date of birth
    #[arg(
        long = "date-of-birth",
        value_name = "YYYY-MM-DD",
        help = "Client date of birth (default: 1982-07-03)"
    )]
    pub date_of_birth: Option<NaiveDate>,

    /// Client PIN
    #[arg(long = "pin", value_name = "DIGITS", help = "Client PIN (default: 1234)")]
    pub pin: Option<Pin>,

    /// Account type label
    #[arg(
        long = "account-type",
        value_name = "TYPE",
        help = "Account type label (default: Savings)"
    )]
    pub account_type: Option<String>,

    /// Initial balance
    #[arg(
        long = "starting-balance",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Initial account balance (default: 1000, negative values fall back to 0)"
    )]
    pub starting_balance: Option<Decimal>,

    /// Require the PIN for deposits too
    #[arg(long = "deposit-requires-pin")]
    pub deposit_requires_pin: bool,

    /// How the PIN is read from the terminal
    #[arg(
        long = "pin-input",
        value_name = "MODE",
        default_value = "masked",
        help = "PIN entry: 'masked' for key-by-key with * echo, 'plain' for line input"
    )]
    pub pin_input: PinInputMode,

    /// How the PIN is stored in memory
    #[arg(
        long = "credential-storage",
        value_name = "MODE",
        default_value = "plain",
        help = "PIN storage: 'plain' or 'salted' (salted SHA-256 digest)"
    )]
    pub credential_storage: CredentialStorage,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// Build a SessionConfig from CLI arguments
    ///
    /// Unset options keep the values of `SessionConfig::default()`. The result
    /// is sanitized, which logs a warning for every replaced value.
    pub fn to_session_config(&self) -> SessionConfig {
        let default = SessionConfig::default();

        SessionConfig {
            client_id: self.client_id.unwrap_or(default.client_id),
            last_name: self.last_name.clone().unwrap_or(default.last_name),
            first_name: self.first_name.clone().unwrap_or(default.first_name),
            date_of_birth: self.date_of_birth.unwrap_or(default.date_of_birth),
            pin: self.pin.unwrap_or(default.pin),
            date_joined: default.date_joined,
            account_type: self.account_type.clone().unwrap_or(default.account_type),
            starting_balance: self.starting_balance.unwrap_or(default.starting_balance),
            deposit_policy: if self.deposit_requires_pin {
                DepositPolicy::PinRequired
            } else {
                DepositPolicy::Open
            },
            credential_storage: self.credential_storage,
            pin_input: self.pin_input,
        }
        .sanitized()
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

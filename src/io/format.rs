//! Text conversion for the console shell
//!
//! Parsing of user-typed values (amounts, dates, names) and rendering of
//! balances and account summaries.

use crate::core::AccountSummary;
use crate::types::InputError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date format accepted on input and used on output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Most decimal places an amount typed at the shell may carry
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Parse a strictly positive decimal amount with at most two decimal places
///
/// Trailing zeros do not count, so `"5.000"` is accepted.
///
/// # Errors
///
/// Returns an error if:
/// - The input is not a decimal number (`InputError::InvalidAmount`)
/// - The amount is zero or negative (`InputError::NonPositiveAmount`)
/// - The amount has sub-cent digits (`InputError::AmountTooPrecise`)
pub fn parse_amount(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    let amount = Decimal::from_str(trimmed).map_err(|_| InputError::invalid_amount(trimmed))?;

    if amount <= Decimal::ZERO {
        return Err(InputError::non_positive_amount(trimmed));
    }

    if amount.normalize().scale() > AMOUNT_DECIMAL_PLACES {
        return Err(InputError::amount_too_precise(trimmed));
    }

    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| InputError::invalid_date(trimmed))
}

/// Parse a non-blank name field, trimming surrounding whitespace
pub fn parse_name(input: &str, field: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// Render an amount exactly, padded to at least two decimal places
///
/// Sub-cent digits are printed rather than rounded away, so the shown
/// balance is always the real one.
pub fn format_amount(amount: Decimal) -> String {
    let exact = amount.normalize();
    if exact.scale() < AMOUNT_DECIMAL_PLACES {
        format!("{:.2}", exact)
    } else {
        exact.to_string()
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Lines printed by the `info` action
pub fn summary_lines(summary: &AccountSummary) -> Vec<String> {
    vec![
        "Client Information:".to_string(),
        format!("Name: {}", summary.full_name),
        format!("Date of Birth: {}", format_date(summary.date_of_birth)),
        format!("Member Since: {}", format_date(summary.date_joined)),
        format!("Account Type: {}", summary.account_type),
        format!("Current Balance: {}", format_amount(summary.balance)),
    ]
}

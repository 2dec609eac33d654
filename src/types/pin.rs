//! PIN value type
//!
//! A PIN is an opaque numeric credential. Any non-empty run of ASCII digits
//! that fits in a `u32` is accepted; no width or range rule is enforced.
//! Leading zeros collapse, so `"0042"` and `"42"` are the same PIN.

use super::error::InputError;
use std::fmt;
use std::str::FromStr;

/// Numeric personal identification number
///
/// `Debug` and `Display` never reveal the digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin(u32);

impl Pin {
    pub const fn new(value: u32) -> Self {
        Pin(value)
    }

    /// The numeric value, for credential hashing
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Pin {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::InvalidPin);
        }
        digits
            .parse::<u32>()
            .map(Pin)
            .map_err(|_| InputError::InvalidPin)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

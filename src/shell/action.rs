use crate::types::InputError;
use std::str::FromStr;

/// A keyword typed at the shell's action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
    Info,
    Update,
    Quit,
}

impl FromStr for Action {
    type Err = InputError;

    /// Keywords are matched case-insensitively after trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim().to_lowercase();
        match keyword.as_str() {
            "deposit" => Ok(Action::Deposit),
            "withdraw" => Ok(Action::Withdraw),
            "info" => Ok(Action::Info),
            "update" => Ok(Action::Update),
            "quit" => Ok(Action::Quit),
            _ => Err(InputError::unknown_action(s.trim())),
        }
    }
}

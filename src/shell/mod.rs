//! Interactive account shell
//!
//! The shell is the console front end for a single [`Account`]. It asks for
//! the PIN once at login and reuses it for every following action, the way a
//! teller session would:
//!
//! ```text
//! Please enter your PIN to access your account:
//! ****
//! Current Balance: 1000.00
//! What would you like to do? (deposit, withdraw, info, update, quit):
//! ```
//!
//! # Error Handling
//!
//! - Authentication failures inside an action are printed and the loop
//!   continues; a bad PIN never ends the session.
//! - Unparseable values re-prompt.
//! - End of input ends the session normally; I/O errors are returned.

mod action;

pub use action::Action;

use crate::core::{Account, DepositPolicy};
use crate::io::{
    format_amount, parse_amount, parse_date, parse_name, summary_lines, PinReader, Prompter,
};
use crate::types::{BankError, InputError, Pin};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

const ACTION_PROMPT: &str = "What would you like to do? (deposit, withdraw, info, update, quit):";

/// Failure of a single shell action
#[derive(Debug, Error)]
enum ActionError {
    /// Reported to the user; the session continues
    #[error(transparent)]
    Bank(#[from] BankError),
    /// Ends the session
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Interactive session over one account
pub struct Shell<R, W> {
    account: Account,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(account: Account, input: R, output: W, pin_reader: Box<dyn PinReader>) -> Self {
        Shell {
            account,
            prompter: Prompter::new(input, output, pin_reader),
        }
    }

    /// Run the session until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if the console cannot be read or written.
    pub fn run(&mut self) -> Result<(), InputError> {
        match self.run_session() {
            Err(InputError::EndOfInput) => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    /// Consume the shell, returning the account and the output sink
    pub fn into_parts(self) -> (Account, W) {
        (self.account, self.prompter.into_output())
    }

    fn run_session(&mut self) -> Result<(), InputError> {
        let mut pin = self.login()?;

        loop {
            let answer = self.prompter.ask(ACTION_PROMPT)?;
            let action = match answer.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    self.prompter.say(&e.to_string())?;
                    continue;
                }
            };

            if action == Action::Quit {
                self.prompter.say("Exiting.")?;
                info!("session ended by user");
                return Ok(());
            }

            debug!(?action, "dispatching action");
            match self.dispatch(action, &mut pin) {
                Ok(()) => {}
                Err(ActionError::Bank(e)) => self.prompter.say(&format!("Error: {}", e))?,
                Err(ActionError::Input(e)) => return Err(e),
            }
        }
    }

    /// Ask for the PIN until it matches, then show the balance
    ///
    /// No attempt limit applies.
    fn login(&mut self) -> Result<Pin, InputError> {
        loop {
            let pin = self
                .prompter
                .ask_pin("Please enter your PIN to access your account:")?;
            match self.account.check_balance(pin) {
                Ok(balance) => {
                    self.prompter
                        .say(&format!("Current Balance: {}", format_amount(balance)))?;
                    info!(client = self.account.client().id(), "session authenticated");
                    return Ok(pin);
                }
                Err(e) => self.prompter.say(&format!("Error: {}", e))?,
            }
        }
    }

    fn dispatch(&mut self, action: Action, pin: &mut Pin) -> Result<(), ActionError> {
        match action {
            Action::Deposit => self.deposit(*pin),
            Action::Withdraw => self.withdraw(*pin),
            Action::Info => self.info(*pin),
            Action::Update => self.update(pin),
            Action::Quit => Ok(()),
        }
    }

    fn deposit(&mut self, pin: Pin) -> Result<(), ActionError> {
        let amount = self
            .prompter
            .ask_parsed("Enter amount to deposit:", parse_amount)?;

        match self.account.deposit_policy() {
            DepositPolicy::Open => self.account.deposit(amount)?,
            DepositPolicy::PinRequired => self.account.deposit_with_pin(amount, pin)?,
        }

        self.report_balance(pin)
    }

    fn withdraw(&mut self, pin: Pin) -> Result<(), ActionError> {
        let amount = self
            .prompter
            .ask_parsed("Enter amount to withdraw:", parse_amount)?;

        if self.account.withdraw(amount, pin)? {
            self.report_balance(pin)
        } else {
            self.prompter.say("Insufficient funds.")?;
            Ok(())
        }
    }

    fn info(&mut self, pin: Pin) -> Result<(), ActionError> {
        let summary = self.account.summary(pin)?;
        for line in summary_lines(&summary) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    /// Re-authenticate, then replace the whole profile
    ///
    /// The session continues with the new PIN.
    fn update(&mut self, pin: &mut Pin) -> Result<(), ActionError> {
        let current = self.prompter.ask_pin("Enter your current PIN:")?;
        self.account.authenticate(current)?;

        let last_name = self
            .prompter
            .ask_parsed("Enter last name:", |s| parse_name(s, "Last name"))?;
        let first_name = self
            .prompter
            .ask_parsed("Enter first name:", |s| parse_name(s, "First name"))?;
        let date_of_birth = self
            .prompter
            .ask_parsed("Enter date of birth (YYYY-MM-DD):", parse_date)?;
        let new_pin = self.prompter.ask_pin("Enter new PIN:")?;

        self.account
            .update_client(last_name, first_name, date_of_birth, new_pin);
        *pin = new_pin;

        self.prompter.say("Profile updated.")?;
        Ok(())
    }

    fn report_balance(&mut self, pin: Pin) -> Result<(), ActionError> {
        let balance = self.account.check_balance(pin)?;
        self.prompter
            .say(&format!("New balance: {}", format_amount(balance)))?;
        Ok(())
    }
}

//! End-to-end shell session tests
//!
//! These tests drive the interactive shell through in-memory input and
//! output, using line-based PIN entry. Each test:
//! 1. Builds the default demo account (PIN 1234, balance 1000)
//! 2. Feeds a scripted sequence of answers to the shell
//! 3. Checks the transcript and the final account state
//!
//! Covered flows:
//! - Login with correct and incorrect PINs
//! - Deposits, withdrawals and insufficient funds
//! - Profile display and update
//! - Recovery from malformed input
//! - End of input at every prompt

#[cfg(test)]
mod tests {
    use pin_bank::io::PlainPinReader;
    use pin_bank::{Account, DepositPolicy, Pin, SessionConfig, Shell};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    const PIN: Pin = Pin::new(1234);

    /// Run a scripted session and return the final account and transcript
    fn run_session(config: SessionConfig, script: &str) -> (Account, String) {
        let mut shell = Shell::new(
            config.build_account(),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Box::new(PlainPinReader),
        );

        shell
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let (account, output) = shell.into_parts();
        let transcript = String::from_utf8(output).expect("Transcript is not UTF-8");
        (account, transcript)
    }

    fn default_session(script: &str) -> (Account, String) {
        run_session(SessionConfig::default(), script)
    }

    #[test]
    fn test_login_then_quit() {
        let (_, transcript) = default_session("1234\nquit\n");

        assert_eq!(
            transcript,
            "Please enter your PIN to access your account:\n\
             Current Balance: 1000.00\n\
             What would you like to do? (deposit, withdraw, info, update, quit):\n\
             Exiting.\n"
        );
    }

    #[test]
    fn test_wrong_login_pin_reprompts() {
        let (_, transcript) = default_session("9999\n1234\nquit\n");

        assert!(transcript.starts_with(
            "Please enter your PIN to access your account:\n\
             Error: Invalid PIN.\n\
             Please enter your PIN to access your account:\n\
             Current Balance: 1000.00\n"
        ));
    }

    #[test]
    fn test_deposit_and_withdraw_scenario() {
        let (account, transcript) = default_session(
            "1234\n\
             deposit\n250.50\n\
             withdraw\n2000.00\n\
             withdraw\n50.50\n\
             quit\n",
        );

        assert!(transcript.contains("New balance: 1250.50\n"));
        assert!(transcript.contains("Insufficient funds.\n"));
        assert!(transcript.contains("New balance: 1200.00\n"));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(120000, 2)));
    }

    #[test]
    fn test_info_shows_profile() {
        let config = SessionConfig::default();
        let joined = config.date_joined.format("%Y-%m-%d").to_string();
        let (_, transcript) = run_session(config, "1234\ninfo\nquit\n");

        assert!(transcript.contains(
            "Client Information:\n\
             Name: Tom Boszko\n\
             Date of Birth: 1982-07-03\n"
        ));
        assert!(transcript.contains(&format!("Member Since: {}\n", joined)));
        assert!(transcript.contains("Account Type: Savings\nCurrent Balance: 1000.00\n"));
    }

    #[test]
    fn test_update_switches_session_pin() {
        let (account, transcript) = default_session(
            "1234\n\
             update\n1234\nDoe\nJane\n1990-05-01\n4321\n\
             info\n\
             withdraw\n100\n\
             quit\n",
        );

        assert!(transcript.contains("Profile updated.\n"));
        assert!(transcript.contains("Name: Jane Doe\n"));
        assert!(transcript.contains("Date of Birth: 1990-05-01\n"));
        assert!(transcript.contains("New balance: 900.00\n"));
        assert!(!transcript.contains("Error:"));
        assert_eq!(
            account.check_balance(PIN),
            Err(pin_bank::BankError::InvalidPin)
        );
        assert_eq!(
            account.check_balance(Pin::new(4321)),
            Ok(Decimal::new(900, 0))
        );
    }

    #[test]
    fn test_update_reprompts_on_bad_fields() {
        let (account, transcript) = default_session(
            "1234\n\
             update\n1234\n  \nDoe\nJane\n01/05/1990\n1990-05-01\n43a1\n4321\n\
             quit\n",
        );

        assert!(transcript.contains("Last name must not be empty.\n"));
        assert!(transcript.contains("Invalid date '01/05/1990'. Please use the format YYYY-MM-DD.\n"));
        assert!(transcript.contains("PIN must be numeric.\n"));
        assert_eq!(account.client().full_name(), "Jane Doe");
    }

    #[rstest]
    #[case::letters("abc", "Invalid amount 'abc'. Please enter a number such as 250.50.")]
    #[case::negative("-10", "Amount must be greater than zero, got -10.")]
    #[case::zero("0", "Amount must be greater than zero, got 0.")]
    #[case::sub_cent("0.006", "Amount can have at most two decimal places, got 0.006.")]
    fn test_bad_amount_reprompts(#[case] bad: &str, #[case] message: &str) {
        let (account, transcript) =
            default_session(&format!("1234\ndeposit\n{}\n10\nquit\n", bad));

        assert!(transcript.contains(&format!(
            "Enter amount to deposit:\n{}\nEnter amount to deposit:\n",
            message
        )));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(1010, 0)));
    }

    #[test]
    fn test_action_keywords_are_case_insensitive() {
        let (account, transcript) = default_session("1234\n  DEPOSIT \n5\nQuit\n");

        assert!(transcript.contains("New balance: 1005.00\n"));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(1005, 0)));
    }

    #[test]
    fn test_pin_required_deposits() {
        let config = SessionConfig {
            deposit_policy: DepositPolicy::PinRequired,
            ..SessionConfig::default()
        };
        let (account, transcript) = run_session(config, "1234\ndeposit\n100\nquit\n");

        assert!(transcript.contains("New balance: 1100.00\n"));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(1100, 0)));
    }

    #[test]
    fn test_sub_cent_balance_is_shown_exactly() {
        let config = SessionConfig {
            starting_balance: Decimal::new(1000006, 3),
            ..SessionConfig::default()
        };
        let (account, transcript) =
            run_session(config, "1234\nwithdraw\n1000.01\nwithdraw\n1000\nquit\n");

        assert!(transcript.starts_with(
            "Please enter your PIN to access your account:\n\
             Current Balance: 1000.006\n"
        ));
        assert!(transcript.contains("Insufficient funds.\n"));
        assert!(transcript.contains("New balance: 0.006\n"));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(6, 3)));
    }

    #[test]
    fn test_salted_credentials_behave_the_same() {
        let config = SessionConfig {
            credential_storage: pin_bank::CredentialStorage::Salted,
            ..SessionConfig::default()
        };
        let (account, transcript) =
            run_session(config, "0000\n1234\nwithdraw\n1000\nquit\n");

        assert!(transcript.contains("Error: Invalid PIN.\n"));
        assert!(transcript.contains("New balance: 0.00\n"));
        assert_eq!(account.check_balance(PIN), Ok(Decimal::ZERO));
    }

    #[rstest]
    #[case::before_login("")]
    #[case::after_login("1234\n")]
    #[case::mid_deposit("1234\ndeposit\n")]
    #[case::mid_update("1234\nupdate\n1234\nDoe\n")]
    fn test_end_of_input_ends_session_cleanly(#[case] script: &str) {
        let (account, _) = default_session(script);

        assert_eq!(account.client().full_name(), "Tom Boszko");
        assert_eq!(account.check_balance(PIN), Ok(Decimal::new(1000, 0)));
    }
}

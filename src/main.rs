//! PIN Bank CLI
//!
//! Interactive console for a single PIN-protected bank account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --pin 4321 --starting-balance 250 --account-type Checking
//! cargo run -- --deposit-requires-pin --credential-storage salted
//! printf '1234\ninfo\nquit\n' | cargo run -- --pin-input plain
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the level chosen with `-v`.
//!
//! # Exit Codes
//!
//! - 0: Session ended with `quit` or end of input, or `--help` was shown
//! - 1: Invalid command-line configuration, or terminal I/O error

use pin_bank::cli;
use pin_bank::io::PinInputMode;
use pin_bank::Shell;
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse command-line arguments using clap
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(cli::exit_code(&e));
        }
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = args.to_session_config();
    if config.pin_input == PinInputMode::Masked && !io::stdin().is_terminal() {
        tracing::warn!("stdin is not a terminal, falling back to plain PIN input");
        config.pin_input = PinInputMode::Plain;
    }

    let account = config.build_account();
    let mut shell = Shell::new(
        account,
        io::stdin().lock(),
        io::stdout(),
        config.pin_input.reader(),
    );

    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

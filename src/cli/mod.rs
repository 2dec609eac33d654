// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// # Errors
///
/// Returns the clap error for invalid arguments, and also for `--help` and
/// `--version`, whose text clap carries in the error. Use [`exit_code`] to
/// tell the two apart.
pub fn parse_args() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

/// Process exit code for a failed [`parse_args`]
///
/// Help and version output exit with 0. Every invalid configuration exits
/// with 1, the same code as a terminal failure.
pub fn exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}

// I/O module
// Console prompting, PIN entry and text formatting for the shell

pub mod format;
pub mod pin_input;
pub mod prompt;

pub use format::{format_amount, format_date, parse_amount, parse_date, parse_name, summary_lines};
pub use pin_input::{MaskedPinReader, PinInputMode, PinReader, PlainPinReader};
pub use prompt::Prompter;

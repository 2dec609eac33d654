//! Line-oriented prompting with re-prompt on bad input

use super::pin_input::PinReader;
use crate::types::{InputError, Pin};
use std::io::{BufRead, Write};
use tracing::debug;

/// Console endpoint: line input, text output and a PIN reader
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pin_reader: Box<dyn PinReader>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, pin_reader: Box<dyn PinReader>) -> Self {
        Prompter {
            input,
            output,
            pin_reader,
        }
    }

    /// Write one line of text
    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read one line, without the trailing newline
    ///
    /// # Errors
    ///
    /// Returns `InputError::EndOfInput` when the input is closed.
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        self.say(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer
    ///
    /// Recoverable parse errors are printed and the prompt repeats; end of
    /// input and I/O errors are returned.
    pub fn ask_parsed<T, F>(&mut self, prompt: &str, parse: F) -> Result<T, InputError>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "re-prompting after invalid input");
                    self.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask for a PIN until a well-formed one is entered
    pub fn ask_pin(&mut self, prompt: &str) -> Result<Pin, InputError> {
        loop {
            self.say(prompt)?;
            match self.pin_reader.read_pin(&mut self.input, &mut self.output) {
                Ok(pin) => return Ok(pin),
                Err(e) if e.is_recoverable() => self.say(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::format::parse_amount;
    use crate::io::pin_input::PlainPinReader;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Box::new(PlainPinReader),
        )
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = prompter("deposit\r\n");

        assert_eq!(prompter.ask("Action?"), Ok("deposit".to_string()));
        assert_eq!(output_of(prompter), "Action?\n");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = prompter("");
        assert_eq!(prompter.ask("Action?"), Err(InputError::EndOfInput));
    }

    #[test]
    fn test_ask_parsed_reprompts() {
        let mut prompter = prompter("abc\n-1\n25.5\n");

        assert_eq!(
            prompter.ask_parsed("Amount?", parse_amount),
            Ok(Decimal::new(255, 1))
        );
        assert_eq!(
            output_of(prompter),
            "Amount?\n\
             Invalid amount 'abc'. Please enter a number such as 250.50.\n\
             Amount?\n\
             Amount must be greater than zero, got -1.\n\
             Amount?\n"
        );
    }

    #[test]
    fn test_ask_parsed_stops_at_end_of_input() {
        let mut prompter = prompter("abc\n");
        assert_eq!(
            prompter.ask_parsed("Amount?", parse_amount),
            Err(InputError::EndOfInput)
        );
    }

    #[test]
    fn test_ask_pin_reprompts_on_malformed_pin() {
        let mut prompter = prompter("12x4\n1234\n");

        assert_eq!(prompter.ask_pin("PIN?"), Ok(Pin::new(1234)));
        assert_eq!(output_of(prompter), "PIN?\nPIN must be numeric.\nPIN?\n");
    }
}

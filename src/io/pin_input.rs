//! PIN entry
//!
//! Two readers implement [`PinReader`]:
//!
//! - [`MaskedPinReader`] switches the terminal to raw mode and reads key by
//!   key, echoing `*` for each digit. This is the interactive default.
//! - [`PlainPinReader`] reads a whole line from the shell's input. Used when
//!   stdin is not a terminal, and by the tests.
//!
//! Key handling lives in [`PinBuffer`], which has no terminal dependency.

use crate::types::{InputError, Pin};
use clap::ValueEnum;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{BufRead, Write};

/// Erases the last echoed `*`
const ERASE: &str = "\u{8} \u{8}";

/// Source of PIN values for the shell
pub trait PinReader {
    /// Read one PIN
    ///
    /// `input` is the shell's line input; readers that talk to the terminal
    /// directly may ignore it.
    ///
    /// # Errors
    ///
    /// - `InputError::InvalidPin` if the entry is not a valid PIN (recoverable)
    /// - `InputError::EndOfInput` if input is closed or entry is cancelled
    /// - `InputError::Io` on terminal failure
    fn read_pin(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Pin, InputError>;
}

/// How the binary reads PINs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PinInputMode {
    /// Key-by-key entry echoing `*`
    #[default]
    Masked,
    /// Line-based entry, echoed by the terminal
    Plain,
}

impl PinInputMode {
    pub fn reader(self) -> Box<dyn PinReader> {
        match self {
            PinInputMode::Masked => Box::new(MaskedPinReader),
            PinInputMode::Plain => Box::new(PlainPinReader),
        }
    }
}

/// A key relevant to PIN entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKey {
    Char(char),
    Backspace,
    Enter,
    Cancel,
}

/// What the terminal should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Write this text to the terminal
    Echo(&'static str),
    Ignored,
    /// Entry is complete
    Submit,
    Cancelled,
}

/// Digits typed so far during masked entry
#[derive(Debug, Default)]
pub struct PinBuffer {
    digits: String,
}

impl PinBuffer {
    pub fn press(&mut self, key: PinKey) -> KeyOutcome {
        match key {
            PinKey::Char(c) if c.is_ascii_digit() => {
                self.digits.push(c);
                KeyOutcome::Echo("*")
            }
            PinKey::Backspace if !self.digits.is_empty() => {
                self.digits.pop();
                KeyOutcome::Echo(ERASE)
            }
            // Enter on an empty buffer keeps waiting
            PinKey::Enter if !self.digits.is_empty() => KeyOutcome::Submit,
            PinKey::Cancel => KeyOutcome::Cancelled,
            _ => KeyOutcome::Ignored,
        }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Convert the collected digits into a PIN
    ///
    /// Fails with `InputError::InvalidPin` when the digits overflow a PIN.
    pub fn finish(&self) -> Result<Pin, InputError> {
        self.digits.parse()
    }
}

/// Line-based PIN reader
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPinReader;

impl PinReader for PlainPinReader {
    fn read_pin(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Pin, InputError> {
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::EndOfInput);
        }
        line.parse()
    }
}

/// Raw-mode, key-by-key PIN reader
#[derive(Debug, Default, Clone, Copy)]
pub struct MaskedPinReader;

impl PinReader for MaskedPinReader {
    fn read_pin(
        &mut self,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Pin, InputError> {
        output.flush()?;
        terminal::enable_raw_mode()?;
        let result = collect_masked(output);
        terminal::disable_raw_mode()?;
        result
    }
}

fn collect_masked(output: &mut dyn Write) -> Result<Pin, InputError> {
    let mut buffer = PinBuffer::default();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(pin_key) = map_key(key) else {
            continue;
        };

        match buffer.press(pin_key) {
            KeyOutcome::Echo(text) => {
                output.write_all(text.as_bytes())?;
                output.flush()?;
            }
            KeyOutcome::Ignored => {}
            KeyOutcome::Submit => {
                output.write_all(b"\r\n")?;
                output.flush()?;
                return buffer.finish();
            }
            KeyOutcome::Cancelled => {
                output.write_all(b"\r\n")?;
                output.flush()?;
                return Err(InputError::EndOfInput);
            }
        }
    }
}

fn map_key(key: KeyEvent) -> Option<PinKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PinKey::Cancel)
        }
        KeyCode::Esc => Some(PinKey::Cancel),
        KeyCode::Char(c) => Some(PinKey::Char(c)),
        KeyCode::Backspace => Some(PinKey::Backspace),
        KeyCode::Enter => Some(PinKey::Enter),
        _ => None,
    }
}

//! `KEY:VALUE` command lines.
//!
//! A command is split on the first delimiter byte only; everything after it,
//! further delimiters included, is the value. Nothing is trimmed and nothing
//! is decoded: key and value are the raw bytes of the line, so a line that is
//! not valid UTF-8 still splits like any other.

use core::fmt;
use core::str;

use super::config::DELIMITER;

/// A parsed command, borrowing from the line it was split out of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Command<'a> {
    /// Bytes before the first delimiter. May be empty.
    pub key: &'a [u8],
    /// Bytes after the first delimiter. May be empty.
    pub value: &'a [u8],
}

/// Why a line could not be split into a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CommandParseError {
    /// No delimiter in the line.
    MissingDelimiter,
}

impl<'a> Command<'a> {
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Command {
            key: key.as_bytes(),
            value: value.as_bytes(),
        }
    }

    /// Splits a text line on its first delimiter.
    pub fn parse(line: &'a str) -> Result<Self, CommandParseError> {
        Self::parse_bytes(line.as_bytes())
    }

    /// Splits a raw line taken off the wire on its first delimiter byte.
    pub fn parse_bytes(line: &'a [u8]) -> Result<Self, CommandParseError> {
        let delimiter = DELIMITER as u8;
        let at = line
            .iter()
            .position(|&b| b == delimiter)
            .ok_or(CommandParseError::MissingDelimiter)?;
        Ok(Command {
            key: &line[..at],
            value: &line[at + 1..],
        })
    }

    /// Key as text, if it is valid UTF-8.
    pub fn key_str(&self) -> Option<&'a str> {
        str::from_utf8(self.key).ok()
    }

    /// Value as text, if it is valid UTF-8.
    pub fn value_str(&self) -> Option<&'a str> {
        str::from_utf8(self.value).ok()
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", Utf8Lossy(self.key), DELIMITER, Utf8Lossy(self.value))
    }
}

/// Displays raw line bytes as text, escaping invalid UTF-8 as `\xNN`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Utf8Lossy<'a>(pub &'a [u8]);

impl fmt::Display for Utf8Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.utf8_chunks() {
            f.write_str(chunk.valid())?;
            for byte in chunk.invalid() {
                write!(f, "\\x{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

// src/common/event.rs

use core::fmt;

use super::command::{Command, Utf8Lossy};

/// Outcome of dispatching one completed line. Exactly one is produced per line.
///
/// These are informational reports for the logging side, not errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DispatchEvent<'a> {
    /// Key was registered and its handler ran with the value.
    LineParsed(Command<'a>),
    /// No delimiter in the line. Raw line, terminator excluded.
    MalformedLine(&'a [u8]),
    /// Delimiter found but no handler registered for the key.
    UnknownCommand(Command<'a>),
}

impl<'a> DispatchEvent<'a> {
    /// The command, if the line could be split.
    pub fn command(&self) -> Option<&Command<'a>> {
        match self {
            DispatchEvent::LineParsed(cmd) | DispatchEvent::UnknownCommand(cmd) => Some(cmd),
            DispatchEvent::MalformedLine(_) => None,
        }
    }

    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self, DispatchEvent::LineParsed(_))
    }
}

impl fmt::Display for DispatchEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchEvent::LineParsed(cmd) => write!(
                f,
                "parse command: {} -> {}",
                Utf8Lossy(cmd.key),
                Utf8Lossy(cmd.value)
            ),
            DispatchEvent::UnknownCommand(cmd) => write!(f, "unknown command: {}", Utf8Lossy(cmd.key)),
            DispatchEvent::MalformedLine(raw) => write!(f, "invalid line format: {}", Utf8Lossy(raw)),
        }
    }
}

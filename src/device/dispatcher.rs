// src/device/dispatcher.rs

use super::registry::CommandRegistry;
use crate::common::{
    command::{Command, Utf8Lossy},
    config::REGISTRY_CAPACITY,
    event::DispatchEvent,
};

/// Routes completed lines to their handlers.
#[derive(Debug)]
pub struct CommandDispatcher<'h, const M: usize = REGISTRY_CAPACITY> {
    registry: CommandRegistry<'h, M>,
}

impl<'h, const M: usize> CommandDispatcher<'h, M> {
    /// Takes ownership of the registry; it cannot change after this point.
    pub fn new(registry: CommandRegistry<'h, M>) -> Self {
        CommandDispatcher { registry }
    }

    pub fn registry(&self) -> &CommandRegistry<'h, M> {
        &self.registry
    }

    /// Splits `line` on its first delimiter and runs the matching handler.
    ///
    /// The handler, if any, runs exactly once. The returned event describes
    /// what happened; nothing here can fail. Only a missing delimiter makes a
    /// line malformed: a key that is not valid UTF-8 matches nothing, and the
    /// value reaches the handler as raw bytes.
    pub fn dispatch<'l>(&self, line: &'l [u8]) -> DispatchEvent<'l> {
        let Ok(command) = Command::parse_bytes(line) else {
            return DispatchEvent::MalformedLine(line);
        };

        tracing::trace!(
            key = %Utf8Lossy(command.key),
            value = %Utf8Lossy(command.value),
            "split command line"
        );

        match command.key_str().and_then(|key| self.registry.lookup(key)) {
            Some(handler) => {
                handler.handle(command.value);
                DispatchEvent::LineParsed(command)
            }
            None => DispatchEvent::UnknownCommand(command),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use spin::Mutex;
    use std::vec::Vec;

    /// Records every value it is called with.
    struct Recorder(Mutex<Vec<Vec<u8>>>);

    impl Recorder {
        const fn new() -> Self {
            Recorder(Mutex::new(Vec::new()))
        }

        fn calls(&self) -> Vec<Vec<u8>> {
            self.0.lock().clone()
        }
    }

    impl crate::device::handler::CommandHandler for Recorder {
        fn handle(&self, value: &[u8]) {
            self.0.lock().push(value.to_vec());
        }
    }

    fn dispatcher(press: &Recorder) -> CommandDispatcher<'_, 4> {
        let mut registry = CommandRegistry::new();
        registry.register("PRESS", press).unwrap();
        CommandDispatcher::new(registry)
    }

    #[test]
    fn test_dispatch_known_command() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        let event = dispatcher.dispatch(b"PRESS:1013");
        assert_eq!(event, DispatchEvent::LineParsed(Command::new("PRESS", "1013")));
        assert_eq!(press.calls(), [b"1013"]);
    }

    #[test]
    fn test_dispatch_value_keeps_later_delimiters() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        let event = dispatcher.dispatch(b"PRESS:10:13:");
        assert_eq!(event, DispatchEvent::LineParsed(Command::new("PRESS", "10:13:")));
        assert_eq!(press.calls(), [b"10:13:"]);
    }

    #[test]
    fn test_dispatch_empty_value() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        assert!(dispatcher.dispatch(b"PRESS:").is_parsed());
        assert_eq!(press.calls(), [b""]);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        let event = dispatcher.dispatch(b"FOO:bar");
        assert_eq!(event, DispatchEvent::UnknownCommand(Command::new("FOO", "bar")));
        assert!(press.calls().is_empty());
    }

    #[test]
    fn test_dispatch_key_is_case_sensitive() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        assert!(matches!(dispatcher.dispatch(b"press:1"), DispatchEvent::UnknownCommand(_)));
        assert!(press.calls().is_empty());
    }

    #[test]
    fn test_dispatch_malformed_line() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        assert_eq!(
            dispatcher.dispatch(b"nodeliminterhere"),
            DispatchEvent::MalformedLine(b"nodeliminterhere")
        );
        assert_eq!(dispatcher.dispatch(b""), DispatchEvent::MalformedLine(b""));
        assert!(press.calls().is_empty());
    }

    #[test]
    fn test_dispatch_non_utf8_value_reaches_handler() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        let event = dispatcher.dispatch(b"PRESS:10\xb013");
        assert!(event.is_parsed());
        assert_eq!(event.command().map(|cmd| cmd.value), Some(&b"10\xb013"[..]));
        assert_eq!(press.calls(), [b"10\xb013"]);
    }

    #[test]
    fn test_dispatch_non_utf8_key_is_unknown() {
        let press = Recorder::new();
        let dispatcher = dispatcher(&press);
        let line = [0xC3, b'P', b':', b'1'];
        assert_eq!(
            dispatcher.dispatch(&line),
            DispatchEvent::UnknownCommand(Command { key: &[0xC3, b'P'], value: b"1" })
        );
        // Invalid UTF-8 with no delimiter is still just malformed
        assert_eq!(dispatcher.dispatch(&[0xC3]), DispatchEvent::MalformedLine(&[0xC3]));
        assert!(press.calls().is_empty());
    }
}

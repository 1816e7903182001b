//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use barometer::{
    device::{CommandHandler, CommandRegistry, EventSink},
    BarometerDevice, DispatchEvent,
};
use spin::Mutex;

/// Owned copy of a `DispatchEvent`, so it can outlive the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Parsed(Vec<u8>, Vec<u8>),
    Malformed(Vec<u8>),
    Unknown(Vec<u8>, Vec<u8>),
}

impl Event {
    pub fn parsed(key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Self {
        Event::Parsed(key.as_ref().to_vec(), value.as_ref().to_vec())
    }

    pub fn unknown(key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Self {
        Event::Unknown(key.as_ref().to_vec(), value.as_ref().to_vec())
    }

    pub fn malformed(line: impl AsRef<[u8]>) -> Self {
        Event::Malformed(line.as_ref().to_vec())
    }
}

/// Sink that keeps every event.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl EventSink for RecordingSink {
    fn report(&mut self, event: &DispatchEvent<'_>) {
        self.events.push(match event {
            DispatchEvent::LineParsed(cmd) => Event::parsed(cmd.key, cmd.value),
            DispatchEvent::UnknownCommand(cmd) => Event::unknown(cmd.key, cmd.value),
            DispatchEvent::MalformedLine(raw) => Event::malformed(raw),
        });
    }
}

/// Handler that records the values it was called with.
#[derive(Debug, Default)]
pub struct CallLog(Mutex<Vec<Vec<u8>>>);

impl CallLog {
    /// Recorded values as text, invalid UTF-8 replaced.
    pub fn calls(&self) -> Vec<String> {
        self.raw_calls()
            .iter()
            .map(|value| String::from_utf8_lossy(value).into_owned())
            .collect()
    }

    pub fn raw_calls(&self) -> Vec<Vec<u8>> {
        self.0.lock().clone()
    }
}

impl CommandHandler for CallLog {
    fn handle(&self, value: &[u8]) {
        self.0.lock().push(value.to_vec());
    }
}

/// Device with `PRESS` bound to `press`, capacity 20, recording events.
pub fn device(press: &CallLog) -> BarometerDevice<'_, RecordingSink> {
    let mut registry = CommandRegistry::new();
    registry.register("PRESS", press).expect("register PRESS");
    BarometerDevice::new(registry, RecordingSink::default())
}

/// Same device shape with a caller-chosen line capacity.
pub fn device_with_capacity<const N: usize>(
    press: &CallLog,
) -> BarometerDevice<'_, RecordingSink, N> {
    let mut registry = CommandRegistry::new();
    registry.register("PRESS", press).expect("register PRESS");
    BarometerDevice::new(registry, RecordingSink::default())
}

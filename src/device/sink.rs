// src/device/sink.rs

use crate::common::{config::DeviceInfo, event::DispatchEvent};

/// Receives the one event produced for each completed line.
///
/// How events are surfaced (logs, counters, a test buffer) is up to the sink.
pub trait EventSink {
    fn report(&mut self, event: &DispatchEvent<'_>);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn report(&mut self, event: &DispatchEvent<'_>) {
        (**self).report(event)
    }
}

/// Default sink: one log line per event, tagged with the device name.
///
/// Parsed commands go out at info level, rejected lines at debug level.
#[derive(Debug, Copy, Clone, Default)]
pub struct TracingSink {
    device: DeviceInfo,
}

impl TracingSink {
    pub const fn new(device: DeviceInfo) -> Self {
        TracingSink { device }
    }
}

impl EventSink for TracingSink {
    fn report(&mut self, event: &DispatchEvent<'_>) {
        match event {
            DispatchEvent::LineParsed(_) => tracing::info!(device = self.device.name, "{}", event),
            DispatchEvent::UnknownCommand(_) | DispatchEvent::MalformedLine(_) => {
                tracing::debug!(device = self.device.name, "{}", event)
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn report(&mut self, _event: &DispatchEvent<'_>) {}
}

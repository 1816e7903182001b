// src/device/handler.rs

use crate::common::{command::Utf8Lossy, config::DeviceInfo};

/// Behavior bound to a command key.
///
/// Handlers only produce side effects. They have no way to report failure
/// back to the dispatcher, so whatever goes wrong inside one stays inside it.
/// `Sync` is required because a device may be shared between writers.
pub trait CommandHandler: Sync {
    /// Runs the command with the bytes after the delimiter.
    ///
    /// The value is passed through undecoded and may not be valid UTF-8.
    fn handle(&self, value: &[u8]);
}

// Plain closures and fn items work as handlers
impl<F> CommandHandler for F
where
    F: Fn(&[u8]) + Sync,
{
    fn handle(&self, value: &[u8]) {
        self(value)
    }
}

/// Mock pressure command. Logs the raw value; no numeric validation.
#[derive(Debug, Copy, Clone, Default)]
pub struct PressureHandler {
    device: DeviceInfo,
}

impl PressureHandler {
    pub const fn new(device: DeviceInfo) -> Self {
        PressureHandler { device }
    }
}

impl CommandHandler for PressureHandler {
    fn handle(&self, value: &[u8]) {
        tracing::info!(device = self.device.name, "parsing COMMAND_PRESSURE: {}", Utf8Lossy(value));
    }
}

/// Handler instance used by `CommandRegistry::with_defaults`.
pub static PRESSURE_HANDLER: PressureHandler = PressureHandler::new(DeviceInfo::BAROMETER);

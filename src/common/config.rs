// src/common/config.rs

// Compile-time configuration of the pipeline. Capacities below are the
// defaults; the containers that use them also take const generics so a
// caller can pick other sizes.

// === Framing ===

/// Number of bytes the line buffer holds. Longer lines wrap and keep only
/// their last `LINE_CAPACITY` bytes.
pub const LINE_CAPACITY: usize = 20;
/// Byte that ends a command line (ASCII line feed).
pub const LINE_TERMINATOR: u8 = b'\n';
/// Separates the command key from its value. Only the first one counts.
pub const DELIMITER: char = ':';

// === Transport ===

/// Largest number of bytes a single `write` call accepts; the rest is left
/// for the caller to retry.
pub const MAX_WRITE_CHUNK: usize = 10;

// === Commands ===

/// Default number of handler slots in a `CommandRegistry`.
pub const REGISTRY_CAPACITY: usize = 4;
/// Key of the pressure command.
pub const PRESSURE_KEY: &str = "PRESS";

// === Device identity ===

/// Static identity of the device, used as structured log context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DeviceInfo {
    /// Name the device registers under; prefixes every log line.
    pub name: &'static str,
    /// Device class (also the `/dev` node name).
    pub class: &'static str,
    /// Module alias.
    pub alias: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl DeviceInfo {
    pub const BAROMETER: DeviceInfo = DeviceInfo {
        name: "TopaBarometer",
        class: "barometer",
        alias: "sensor:barometer",
        description: "Mock barometer driver",
        version: env!("CARGO_PKG_VERSION"),
    };
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self::BAROMETER
    }
}

// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod line_buffer;
pub mod transport;

// --- Re-export key types/traits for easier access ---

// From command.rs
pub use command::{Command, CommandParseError, Utf8Lossy};

// From config.rs (constants stay under common::config::*)
pub use config::DeviceInfo;

// From error.rs
pub use error::BarometerError;

// From event.rs
pub use event::DispatchEvent;

// From line_buffer.rs
pub use line_buffer::{Line, LineBuffer};

// From transport.rs
pub use transport::{ByteSource, UserBuffer};

// src/lib.rs

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate std;

pub mod common;
pub mod device;

// Re-export key types for convenience
pub use common::{BarometerError, Command, DispatchEvent, LineBuffer};
pub use device::{BarometerDevice, CommandDispatcher, CommandHandler, CommandRegistry, EventSink};

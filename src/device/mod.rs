// src/device/mod.rs

// Command side of the device: handlers, their registry, the dispatcher that
// routes lines to them, and the sink that receives the outcome.
pub mod dispatcher;
pub mod driver;
pub mod handler;
pub mod registry;
pub mod sink;

// --- Public Re-exports ---
pub use dispatcher::CommandDispatcher;
pub use driver::BarometerDevice;
pub use handler::{CommandHandler, PressureHandler, PRESSURE_HANDLER};
pub use registry::CommandRegistry;
pub use sink::{EventSink, NullSink, TracingSink};

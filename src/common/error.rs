// src/common/error.rs

/// Errors raised by the outer surfaces of the pipeline: registry setup and
/// the transport adapters. Line ingestion and dispatch never fail; bad input
/// there is reported as a `DispatchEvent` instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BarometerError<E = ()>
where
    E: core::fmt::Debug, // Needed for the generic Io message
{
    /// Underlying error from a `ByteSource`.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Nothing could be copied out of a non-empty user buffer.
    #[error("Bad address: could not copy any of {requested} bytes")]
    Fault { requested: usize },

    /// Key can never match a line (empty, or contains the delimiter or terminator).
    #[error("Invalid command key: {0:?}")]
    InvalidCommandKey(&'static str),

    /// A handler is already registered for this key.
    #[error("Duplicate command key: {0}")]
    DuplicateCommand(&'static str),

    /// Registry has no free slot left.
    #[error("Command registry full: capacity {capacity}")]
    RegistryFull { capacity: usize },
}

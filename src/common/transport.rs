// src/common/transport.rs

//! Adapters between byte transports and the line pipeline.
//!
//! The pipeline itself only sees `ingest(&[u8])`. These traits describe the
//! two ways bytes reach it: a user-space write that is copied in (and may be
//! only partly readable), and a non-blocking byte source that is drained.

use core::fmt::Debug;

/// Source buffer of a user-space write.
///
/// Mirrors a copy-from-user step: the copy can stop short, e.g. when part of
/// the source is not readable.
pub trait UserBuffer {
    /// Bytes the caller asked to write.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies from the start of the buffer into `dst` (at most `dst.len()`
    /// bytes). Returns how many bytes were actually copied.
    fn copy_into(&self, dst: &mut [u8]) -> usize;
}

impl UserBuffer for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn copy_into(&self, dst: &mut [u8]) -> usize {
        let count = dst.len().min(<[u8]>::len(self));
        dst[..count].copy_from_slice(&self[..count]);
        count
    }
}

impl<const N: usize> UserBuffer for [u8; N] {
    fn len(&self) -> usize {
        N
    }

    fn copy_into(&self, dst: &mut [u8]) -> usize {
        self.as_slice().copy_into(dst)
    }
}

/// Non-blocking byte source (a UART, a pipe, a test fixture).
pub trait ByteSource {
    /// Associated error type for read failures.
    type Error: Debug;

    /// Attempts to read a single byte.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` when no byte is available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;
}

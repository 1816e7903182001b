// src/common/line_buffer.rs

//! Fixed-capacity circular line accumulator.
//!
//! Bytes are written into a ring of `N` slots. When the line terminator
//! arrives, the bytes written since the last reset are copied out as a
//! [`Line`] and the buffer starts over. A line that runs past `N` bytes is not
//! an error: the ring wraps and the oldest bytes are overwritten, so the
//! extracted line is the last `N` bytes before the terminator.

use arrayvec::ArrayVec;

use super::config::{LINE_CAPACITY, LINE_TERMINATOR};

/// A completed line, terminator excluded. At most `N` bytes.
pub type Line<const N: usize = LINE_CAPACITY> = ArrayVec<u8, N>;

#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize = LINE_CAPACITY> {
    storage: [u8; N],
    /// Next free slot. Always `< N`.
    write_cursor: usize,
    /// Bytes accepted since the last reset. Can exceed `N` once the ring wraps.
    pending: usize,
}

impl<const N: usize> LineBuffer<N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "LineBuffer capacity must be non-zero");

    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        LineBuffer {
            storage: [0u8; N],
            write_cursor: 0,
            pending: 0,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of bytes an extraction would return right now.
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.min(N)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending == 0
    }

    /// True once the current line has overwritten its own first bytes.
    #[inline]
    pub fn has_wrapped(&self) -> bool {
        self.pending > N
    }

    /// Drops any partial line.
    pub fn clear(&mut self) {
        self.write_cursor = 0;
        self.pending = 0;
    }

    /// Accepts one byte. Returns the completed line when `byte` is the terminator.
    pub fn push(&mut self, byte: u8) -> Option<Line<N>> {
        if byte == LINE_TERMINATOR {
            let line = self.snapshot();
            self.clear();
            return Some(line);
        }

        self.storage[self.write_cursor] = byte;
        self.write_cursor = (self.write_cursor + 1) % N;
        self.pending = self.pending.saturating_add(1);
        None
    }

    /// Feeds `bytes` in order, calling `on_line` for every completed line.
    ///
    /// Never blocks and never rejects input; the return value is the number of
    /// bytes consumed, which is always `bytes.len()`.
    pub fn ingest<F>(&mut self, bytes: &[u8], mut on_line: F) -> usize
    where
        F: FnMut(&[u8]),
    {
        for &byte in bytes {
            if let Some(line) = self.push(byte) {
                on_line(&line);
            }
        }
        bytes.len()
    }

    /// Copies out the pending bytes, oldest first.
    fn snapshot(&self) -> Line<N> {
        let len = self.len();
        // Oldest live byte sits `len` slots behind the cursor
        let start = (self.write_cursor + N - len) % N;

        let mut line = Line::<N>::new();
        let (head, tail) = if start + len <= N {
            (&self.storage[start..start + len], &self.storage[..0])
        } else {
            (&self.storage[start..], &self.storage[..start + len - N])
        };
        // Cannot overflow: head.len() + tail.len() == len <= N
        let _ = line.try_extend_from_slice(head);
        let _ = line.try_extend_from_slice(tail);
        line
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

// src/device/driver.rs

use arrayvec::ArrayVec;
use spin::Mutex;

use super::{
    dispatcher::CommandDispatcher,
    registry::CommandRegistry,
    sink::{EventSink, TracingSink},
};
use crate::common::{
    config::{DeviceInfo, LINE_CAPACITY, MAX_WRITE_CHUNK, REGISTRY_CAPACITY},
    error::BarometerError,
    line_buffer::LineBuffer,
    transport::{ByteSource, UserBuffer},
};

/// Mutable half of the device, guarded as one unit.
#[derive(Debug)]
struct DeviceState<S, const N: usize> {
    buffer: LineBuffer<N>,
    sink: S,
}

/// Logs teardown when the device owning it goes away.
#[derive(Debug)]
struct TeardownLog {
    device: &'static str,
}

impl Drop for TeardownLog {
    fn drop(&mut self) {
        tracing::info!(device = self.device, "wrapping device up...");
        tracing::info!(device = self.device, "device closed");
    }
}

/// The barometer pipeline: line buffer, dispatcher and event sink.
///
/// # Concurrency
///
/// `ingest` takes `&self` so a device can sit behind a shared reference and be
/// written from several callers. The line buffer and the sink are held under
/// one spin lock for the whole of each `ingest` call: calls are serialized,
/// the bytes of one call are never interleaved with another's, and events are
/// reported in the order their lines completed. Handlers run with the lock
/// held and must not call back into the same device.
pub struct BarometerDevice<
    'h,
    S = TracingSink,
    const N: usize = LINE_CAPACITY,
    const M: usize = REGISTRY_CAPACITY,
> where
    S: EventSink,
{
    info: DeviceInfo,
    dispatcher: CommandDispatcher<'h, M>,
    state: Mutex<DeviceState<S, N>>,
    // Declared last so it drops after the state
    _teardown: TeardownLog,
}

impl BarometerDevice<'static> {
    /// Device with the built-in commands, logging through `tracing`.
    pub fn with_defaults() -> Result<Self, BarometerError> {
        let registry = CommandRegistry::with_defaults()?;
        Ok(Self::new(registry, TracingSink::new(DeviceInfo::BAROMETER)))
    }
}

impl<'h, S, const N: usize, const M: usize> BarometerDevice<'h, S, N, M>
where
    S: EventSink,
{
    pub fn new(registry: CommandRegistry<'h, M>, sink: S) -> Self {
        Self::with_info(DeviceInfo::BAROMETER, registry, sink)
    }

    pub fn with_info(info: DeviceInfo, registry: CommandRegistry<'h, M>, sink: S) -> Self {
        tracing::info!(device = info.name, "initializing device...");
        let device = BarometerDevice {
            info,
            dispatcher: CommandDispatcher::new(registry),
            state: Mutex::new(DeviceState {
                buffer: LineBuffer::new(),
                sink,
            }),
            _teardown: TeardownLog { device: info.name },
        };
        tracing::info!(
            device = info.name,
            class = info.class,
            commands = device.dispatcher.registry().len(),
            "device initialized"
        );
        device
    }

    #[inline]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    #[inline]
    pub fn dispatcher(&self) -> &CommandDispatcher<'h, M> {
        &self.dispatcher
    }

    // --- Ingestion ---

    /// Feeds raw bytes into the line buffer, dispatching each completed line.
    ///
    /// Always consumes every byte and returns `bytes.len()`.
    pub fn ingest(&self, bytes: &[u8]) -> usize {
        let mut state = self.state.lock();
        let DeviceState { buffer, sink } = &mut *state;
        let dispatcher = &self.dispatcher;

        buffer.ingest(bytes, |line| {
            let event = dispatcher.dispatch(line);
            sink.report(&event);
        })
    }

    /// Bytes held for the line currently being accumulated (at most `N`).
    pub fn pending_len(&self) -> usize {
        self.state.lock().buffer.len()
    }

    /// Drops a partially accumulated line.
    pub fn discard_partial(&self) {
        self.state.lock().buffer.clear();
    }

    // --- Transport Entry Points ---

    /// One user-space write: accepts at most `MAX_WRITE_CHUNK` bytes.
    ///
    /// Returns how many bytes were taken; the caller retries with the rest.
    /// If the copy stops short only the copied prefix is ingested. A non-empty
    /// write of which nothing could be copied fails with `Fault`.
    pub fn write<B>(&self, src: &B) -> Result<usize, BarometerError>
    where
        B: UserBuffer + ?Sized,
    {
        tracing::info!(device = self.info.name, count = src.len(), "fops_write");

        let requested = src.len().min(MAX_WRITE_CHUNK);
        let mut chunk = [0u8; MAX_WRITE_CHUNK];
        let copied = src.copy_into(&mut chunk[..requested]).min(requested);

        if copied == 0 && requested > 0 {
            tracing::warn!(device = self.info.name, requested, "copy from user failed");
            return Err(BarometerError::Fault { requested });
        }

        Ok(self.ingest(&chunk[..copied]))
    }

    /// Repeats `write` until every byte of `bytes` has been accepted.
    pub fn write_all(&self, bytes: &[u8]) -> Result<usize, BarometerError> {
        let mut offset = 0;
        while offset < bytes.len() {
            offset += self.write(&bytes[offset..])?;
        }
        Ok(offset)
    }

    /// Drains `src` until it would block, ingesting in `MAX_WRITE_CHUNK` pieces.
    ///
    /// On a read error the bytes already read are still ingested before the
    /// error is returned.
    pub fn pump<B>(&self, src: &mut B) -> Result<usize, BarometerError<B::Error>>
    where
        B: ByteSource,
    {
        let mut chunk = ArrayVec::<u8, MAX_WRITE_CHUNK>::new();
        let mut total = 0;

        loop {
            match src.read_byte() {
                Ok(byte) => {
                    chunk.push(byte);
                    if chunk.is_full() {
                        total += self.ingest(&chunk);
                        chunk.clear();
                    }
                }
                Err(nb::Error::WouldBlock) => {
                    total += self.ingest(&chunk);
                    return Ok(total);
                }
                Err(nb::Error::Other(e)) => {
                    total += self.ingest(&chunk);
                    tracing::warn!(device = self.info.name, ingested = total, "byte source failed: {:?}", e);
                    return Err(BarometerError::Io(e));
                }
            }
        }
    }

    // --- Sink Access ---

    /// Exclusive access to the sink; no lock needed with `&mut self`.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.state.get_mut().sink
    }

    /// Consumes the device, returning its sink. Logs teardown like a drop.
    pub fn into_sink(self) -> S {
        self.state.into_inner().sink
    }
}

impl<S, const N: usize, const M: usize> core::fmt::Debug for BarometerDevice<'_, S, N, M>
where
    S: EventSink,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarometerDevice")
            .field("info", &self.info)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

//! The stateful reassembly engine.
//!
//! [`StreamFramer`] alternates between collecting a fixed-length header and
//! the variable-length body that header announces. Each `feed` call queues
//! one chunk and then greedily completes as many packets as the buffered
//! bytes allow, so a single call may emit nothing, one packet, or many.

use std::{mem, num::NonZeroUsize};

use bytes::Bytes;
use tracing::{trace, warn};

use super::{BodyLength, ChunkQueue, FramerConfig, FramerError, Packet, PacketSink};

/// Which half of the current packet the engine is waiting for.
#[derive(Debug)]
enum Phase {
    /// Collecting the fixed-length header.
    Head,
    /// Collecting the body announced by `header`.
    Body { header: Bytes },
}

/// Stateful packet reassembler for one ordered byte stream.
///
/// The engine is synchronous and single-owner: `feed` runs to completion,
/// delivering packets inline, and exactly one logical thread of control must
/// drive each instance. Use one engine per stream.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use streamframe::StreamFramer;
///
/// let head_length = NonZeroUsize::new(4).expect("non-zero");
/// let mut framer = StreamFramer::with_head_length(head_length, |head: &[u8]| {
///     usize::from(head[0])
/// });
///
/// let mut packets = Vec::new();
/// framer
///     .feed(vec![2_u8, 0, 0, 0, 0xAA, 0xBB], &mut packets)
///     .expect("no cap configured");
/// assert_eq!(packets.len(), 1);
/// assert_eq!(packets[0].header(), &[2, 0, 0, 0]);
/// assert_eq!(packets[0].body(), &[0xAA, 0xBB]);
/// ```
#[derive(Debug)]
pub struct StreamFramer<L> {
    queue: ChunkQueue,
    phase: Phase,
    bytes_to_read: usize,
    config: FramerConfig,
    length: L,
    failure: Option<FramerError>,
}

impl<L: BodyLength> StreamFramer<L> {
    /// Create an engine from an explicit configuration and length function.
    #[must_use]
    pub fn new(config: FramerConfig, length: L) -> Self {
        Self {
            queue: ChunkQueue::new(),
            phase: Phase::Head,
            bytes_to_read: config.head_length.get(),
            config,
            length,
            failure: None,
        }
    }

    /// Engine with the given header length and no body-length cap.
    #[must_use]
    pub fn with_head_length(head_length: NonZeroUsize, length: L) -> Self {
        Self::new(FramerConfig::new(head_length), length)
    }

    /// Hand one chunk to the engine and deliver every packet it completes.
    ///
    /// Zero or more packets reach `sink` before this returns, strictly in
    /// the order their bytes arrived across `feed` calls. A zero-length
    /// chunk is legal and contributes nothing. Leftover partial data stays
    /// queued until the next call; the engine has no timeout concept, so an
    /// abandoned stream keeps its partial packet buffered indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`FramerError::FrameTooLarge`] when a header announces a
    /// body beyond the configured cap. The stream cannot be resynchronised
    /// after a distrusted header, so every later call fails with the same
    /// error and consumes nothing.
    pub fn feed(
        &mut self,
        chunk: impl Into<Bytes>,
        sink: &mut impl PacketSink,
    ) -> Result<(), FramerError> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        let chunk = chunk.into();
        trace!(
            chunk_len = chunk.len(),
            unread = self.queue.unread(),
            "chunk queued"
        );
        self.queue.push(chunk);
        self.extract_ready(sink)
    }

    /// Complete packets until the queued bytes fall short of the current
    /// phase's requirement.
    fn extract_ready(&mut self, sink: &mut impl PacketSink) -> Result<(), FramerError> {
        while self.queue.unread() >= self.bytes_to_read {
            let bytes = self.queue.extract(self.bytes_to_read);
            match mem::replace(&mut self.phase, Phase::Head) {
                Phase::Head => {
                    let derived = self.length.body_length(&bytes);
                    if let Some(limit) = self.config.max_body_length
                        && derived > limit.get()
                    {
                        let failure = FramerError::FrameTooLarge { derived, limit };
                        warn!(derived, limit = limit.get(), "body length cap exceeded");
                        self.failure = Some(failure);
                        return Err(failure);
                    }
                    self.bytes_to_read = derived;
                    self.phase = Phase::Body { header: bytes };
                }
                Phase::Body { header } => {
                    trace!(
                        head_len = header.len(),
                        body_len = bytes.len(),
                        "packet complete"
                    );
                    sink.deliver(Packet::new(header, bytes));
                    self.bytes_to_read = self.config.head_length.get();
                }
            }
        }
        Ok(())
    }

    /// Total unread bytes currently buffered.
    #[must_use]
    pub fn unread_len(&self) -> usize { self.queue.unread() }

    /// Bytes still required before the current phase can complete.
    #[must_use]
    pub fn bytes_needed(&self) -> usize {
        self.bytes_to_read.saturating_sub(self.queue.unread())
    }

    /// Whether the engine sits between packets, with no header consumed yet.
    #[must_use]
    pub fn is_awaiting_header(&self) -> bool { matches!(self.phase, Phase::Head) }
}

//! Ordered queue of partially consumed byte chunks.
//!
//! [`ChunkQueue`] owns every chunk handed to the framer that still carries
//! unread bytes. Only the front chunk may be partially read; `cursor` marks
//! its first unread byte, and a running total of unread bytes is maintained
//! incrementally so the queue is never recounted. Fully consumed chunks are
//! popped as soon as the cursor passes their end.

use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};

/// FIFO queue of byte chunks with cursor-based consumption.
#[derive(Debug, Default)]
pub struct ChunkQueue {
    chunks: VecDeque<Bytes>,
    cursor: usize,
    unread: usize,
}

impl ChunkQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append a chunk behind any queued data.
    ///
    /// Zero-length chunks are accepted; they contribute no bytes and are
    /// discarded the next time extraction reaches them.
    pub fn push(&mut self, chunk: Bytes) {
        self.unread += chunk.len();
        self.chunks.push_back(chunk);
    }

    /// Total unread bytes across all queued chunks.
    #[must_use]
    pub fn unread(&self) -> usize { self.unread }

    /// Number of chunks currently queued, including any spent ones not yet
    /// discarded.
    #[must_use]
    pub fn chunk_count(&self) -> usize { self.chunks.len() }

    /// Extract exactly `n` unread bytes from the front of the queue.
    ///
    /// When the front chunk alone covers the request, the returned [`Bytes`]
    /// is a zero-copy slice sharing that chunk's storage. Otherwise the bytes
    /// are gathered across chunks into a freshly allocated buffer owned
    /// solely by the caller. The two paths return identical bytes in
    /// identical order.
    ///
    /// # Panics
    ///
    /// Panics when fewer than `n` unread bytes are queued; callers gate on
    /// [`unread`](Self::unread) first.
    #[must_use]
    pub fn extract(&mut self, n: usize) -> Bytes {
        assert!(
            n <= self.unread,
            "extract({n}) with only {} unread bytes queued",
            self.unread,
        );
        if n == 0 {
            return Bytes::new();
        }
        self.discard_spent();

        let front = &self.chunks[0];
        if self.cursor + n <= front.len() {
            let view = front.slice(self.cursor..self.cursor + n);
            self.advance(n);
            return view;
        }

        let mut assembled = BytesMut::with_capacity(n);
        let mut remaining = n;
        while remaining > 0 {
            self.discard_spent();
            let front = &self.chunks[0];
            let take = remaining.min(front.len() - self.cursor);
            assembled.extend_from_slice(&front[self.cursor..self.cursor + take]);
            self.advance(take);
            remaining -= take;
        }
        assembled.freeze()
    }

    /// Move the cursor past `n` unread bytes of the front chunk, popping the
    /// chunk once nothing unread remains in it.
    fn advance(&mut self, n: usize) {
        self.unread -= n;
        if self.cursor + n < self.chunks[0].len() {
            self.cursor += n;
        } else {
            self.chunks.pop_front();
            self.cursor = 0;
        }
    }

    /// Drop front chunks with no unread bytes, including zero-length chunks.
    fn discard_spent(&mut self) {
        while self.chunks.front().is_some_and(|front| front.len() <= self.cursor) {
            self.chunks.pop_front();
            self.cursor = 0;
        }
    }
}

//! Errors reported by the framing engine.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Errors produced by [`StreamFramer::feed`](crate::framer::StreamFramer::feed).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FramerError {
    /// A header announced a body larger than the configured cap.
    ///
    /// A length-prefixed stream cannot be resynchronised once a header is
    /// distrusted, so the engine rejects all further input with this error.
    #[error("derived body length {derived} exceeds configured cap {limit}")]
    FrameTooLarge {
        derived: usize,
        limit: NonZeroUsize,
    },
}

//! Configuration fixed for the lifetime of a framer.

use std::num::NonZeroUsize;

/// Settings that shape how a [`StreamFramer`](crate::framer::StreamFramer)
/// splits its stream.
#[derive(Clone, Copy, Debug)]
pub struct FramerConfig {
    /// Number of bytes in every packet header.
    pub head_length: NonZeroUsize,
    /// Optional hard cap on the body length a header may announce. `None`
    /// reproduces the classic unbounded behaviour of length-prefixed
    /// framing, leaving memory growth under the control of the caller's
    /// length function.
    pub max_body_length: Option<NonZeroUsize>,
}

impl FramerConfig {
    /// Configuration with the given header length and no body-length cap.
    #[must_use]
    pub const fn new(head_length: NonZeroUsize) -> Self {
        Self {
            head_length,
            max_body_length: None,
        }
    }

    /// Cap the body length any single header may announce.
    ///
    /// Exceeding the cap fails the stream with
    /// [`FramerError::FrameTooLarge`](crate::framer::FramerError::FrameTooLarge).
    #[must_use]
    pub const fn with_max_body_length(mut self, limit: NonZeroUsize) -> Self {
        self.max_body_length = Some(limit);
        self
    }
}

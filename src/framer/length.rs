//! Caller-supplied mapping from header bytes to body length.

/// Derives the length of the body that follows a fixed-length header.
///
/// This is the only point where packet contents are interpreted; the engine
/// itself is protocol-agnostic. Implementations must be deterministic for
/// identical header bytes and must not assume they are called more than once
/// per header. The returned length is trusted as-is unless the framer was
/// configured with a cap, so a mis-parsed header can commit the engine to
/// buffering bytes that will never arrive. A panicking implementation
/// unwinds through `feed`; packets extracted earlier in the same call have
/// already been delivered.
pub trait BodyLength {
    /// Number of body bytes announced by `header`.
    fn body_length(&self, header: &[u8]) -> usize;
}

impl<F> BodyLength for F
where
    F: Fn(&[u8]) -> usize,
{
    fn body_length(&self, header: &[u8]) -> usize { self(header) }
}

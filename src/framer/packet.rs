//! The unit of output: one reassembled packet.

use bytes::{Bytes, BytesMut};

/// One complete packet: a fixed-length header and the variable-length body
/// it announced.
///
/// Both halves are cheaply cloneable [`Bytes`] handles. Once delivered, the
/// packet belongs to the caller; the engine retains no reference to it.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use streamframe::Packet;
///
/// let packet = Packet::new(Bytes::from_static(&[2, 0]), Bytes::from_static(&[7, 8]));
/// assert_eq!(packet.header(), &[2, 0]);
/// assert_eq!(packet.body(), &[7, 8]);
/// assert_eq!(packet.to_bytes().as_ref(), &[2, 0, 7, 8]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packet {
    header: Bytes,
    body: Bytes,
}

impl Packet {
    /// Pair a header with its body.
    #[must_use]
    pub const fn new(header: Bytes, body: Bytes) -> Self { Self { header, body } }

    /// Borrow the fixed-length header bytes.
    #[must_use]
    pub fn header(&self) -> &[u8] { self.header.as_ref() }

    /// Borrow the body bytes; may be empty.
    #[must_use]
    pub fn body(&self) -> &[u8] { self.body.as_ref() }

    /// Consume the packet, returning the `(header, body)` halves.
    #[must_use]
    pub fn into_parts(self) -> (Bytes, Bytes) { (self.header, self.body) }

    /// Total length of the packet, header plus body.
    #[must_use]
    pub fn len(&self) -> usize { self.header.len() + self.body.len() }

    /// Whether the packet carries no bytes at all. Never true for packets
    /// produced by the engine, whose headers have a fixed positive length.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.header.is_empty() && self.body.is_empty() }

    /// Reassemble the contiguous wire image, header followed by body.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut image = BytesMut::with_capacity(self.len());
        image.extend_from_slice(&self.header);
        image.extend_from_slice(&self.body);
        image.freeze()
    }
}

//! Emission interface for completed packets.
//!
//! Packets leave the engine through a caller-injected [`PacketSink`] rather
//! than a broadcast mechanism. Closures cover the callback style, the
//! `Vec`/`VecDeque` impls collect packets for later iteration, and the tokio
//! unbounded sender bridges the synchronous engine into async consumers
//! without ever blocking `feed`.

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tracing::debug;

use super::Packet;

/// Receives each completed packet, synchronously, in stream order.
pub trait PacketSink {
    /// Accept one completed packet.
    fn deliver(&mut self, packet: Packet);
}

impl<F> PacketSink for F
where
    F: FnMut(Packet),
{
    fn deliver(&mut self, packet: Packet) { self(packet); }
}

impl PacketSink for Vec<Packet> {
    fn deliver(&mut self, packet: Packet) { self.push(packet); }
}

impl PacketSink for VecDeque<Packet> {
    fn deliver(&mut self, packet: Packet) { self.push_back(packet); }
}

/// Non-blocking bridge into an async consumer. A dropped receiver discards
/// the packet rather than failing the stream.
impl PacketSink for mpsc::UnboundedSender<Packet> {
    fn deliver(&mut self, packet: Packet) {
        if self.send(packet).is_err() {
            debug!("packet sink receiver dropped; discarding packet");
        }
    }
}

//! Tests for the packet sink implementations.

use std::collections::VecDeque;

use bytes::Bytes;
use tokio::sync::mpsc;

use crate::framer::{Packet, PacketSink};

fn sample_packet(tag: u8) -> Packet {
    Packet::new(Bytes::from(vec![tag, 0]), Bytes::from(vec![tag]))
}

#[test]
fn vec_sink_collects_in_order() {
    let mut sink: Vec<Packet> = Vec::new();
    sink.deliver(sample_packet(1));
    sink.deliver(sample_packet(2));

    assert_eq!(sink.len(), 2);
    assert_eq!(sink[0].body(), &[1]);
    assert_eq!(sink[1].body(), &[2]);
}

#[test]
fn deque_sink_pops_from_the_front() {
    let mut sink: VecDeque<Packet> = VecDeque::new();
    sink.deliver(sample_packet(7));
    sink.deliver(sample_packet(8));

    assert_eq!(sink.pop_front().expect("first packet").body(), &[7]);
    assert_eq!(sink.pop_front().expect("second packet").body(), &[8]);
}

#[test]
fn closure_sink_is_invoked_per_packet() {
    let mut tags = Vec::new();
    {
        let mut sink = |packet: Packet| tags.push(packet.body()[0]);
        sink.deliver(sample_packet(3));
        sink.deliver(sample_packet(4));
    }
    assert_eq!(tags, vec![3, 4]);
}

#[test]
fn channel_sink_forwards_without_a_runtime() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut sink = tx;
    sink.deliver(sample_packet(5));

    let packet = rx.try_recv().expect("packet forwarded");
    assert_eq!(packet.body(), &[5]);
}

#[test]
fn channel_sink_tolerates_dropped_receiver() {
    let (tx, rx) = mpsc::unbounded_channel::<Packet>();
    drop(rx);
    let mut sink = tx;
    // Must not panic; the packet is discarded.
    sink.deliver(sample_packet(6));
}

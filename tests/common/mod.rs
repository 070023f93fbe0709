#![allow(dead_code)]
//! Shared MySQL wire-format helpers for the behavioural tests.
//!
//! The framing engine is protocol-agnostic; these helpers exercise it
//! against the MySQL client/server packet layout: a four-byte header whose
//! first three bytes encode the body length little-endian, with a sequence
//! identifier in the fourth.

use std::num::NonZeroUsize;

use streamframe::StreamFramer;

pub const HEAD_LENGTH: usize = 4;
pub const COM_QUERY: u8 = 3;
pub const TEST_SQL: &str = "select * from t";

/// Body length announced by a MySQL packet header.
pub fn mysql_body_length(head: &[u8]) -> usize {
    usize::from(head[0]) | usize::from(head[1]) << 8 | usize::from(head[2]) << 16
}

/// Framer configured for MySQL packets.
pub fn mysql_framer() -> StreamFramer<fn(&[u8]) -> usize> {
    let head_length = NonZeroUsize::new(HEAD_LENGTH).expect("non-zero head length");
    StreamFramer::with_head_length(head_length, mysql_body_length)
}

/// A `COM_QUERY` packet: four-byte header, then a 258-byte body holding the
/// command code and a space-padded SQL string.
pub fn com_query_packet() -> Vec<u8> {
    let mut packet = vec![b' '; HEAD_LENGTH + 258];
    packet[..HEAD_LENGTH].copy_from_slice(&[0x02, 0x01, 0x00, 0x00]);
    packet[HEAD_LENGTH] = COM_QUERY;
    packet[HEAD_LENGTH + 1..HEAD_LENGTH + 1 + TEST_SQL.len()]
        .copy_from_slice(TEST_SQL.as_bytes());
    packet
}

/// Encode one MySQL-framed packet around an arbitrary body.
///
/// # Panics
///
/// Panics when the body exceeds the protocol's three-byte length field.
pub fn encode_packet(sequence: u8, body: &[u8]) -> Vec<u8> {
    assert!(body.len() < 1 << 24, "body too large for a MySQL packet");
    let len = body.len();
    let mut packet = Vec::with_capacity(HEAD_LENGTH + len);
    packet.push((len & 0xFF) as u8);
    packet.push((len >> 8 & 0xFF) as u8);
    packet.push((len >> 16 & 0xFF) as u8);
    packet.push(sequence);
    packet.extend_from_slice(body);
    packet
}

#![doc(html_root_url = "https://docs.rs/streamframe/latest")]
//! Public API for the `streamframe` library.
//!
//! This crate reassembles a continuous byte stream, delivered as an
//! arbitrary sequence of irregularly-sized chunks, into discrete packets:
//! a fixed-length header followed by a variable-length body whose length is
//! derived from the header's contents. The engine is protocol-agnostic; a
//! caller-supplied [`BodyLength`] function is the only point where header
//! bytes are interpreted, which makes the same engine serve any
//! length-prefixed wire format (the test harness exercises it against the
//! MySQL client/server protocol).
//!
//! Transport I/O stays outside: the caller feeds chunks in with
//! [`StreamFramer::feed`] and receives completed packets through an injected
//! [`PacketSink`], synchronously and in stream order.

pub mod framer;

pub use framer::{
    BodyLength,
    ChunkQueue,
    FramerConfig,
    FramerError,
    Packet,
    PacketSink,
    StreamFramer,
};

//! Length-prefixed packet reassembly primitives.
//!
//! This module collects the building blocks of the framing engine. Each
//! sub-module focuses on a single concept to keep the code small and easy to
//! audit while still providing a cohesive API at the crate root.

pub mod chunk_queue;
pub mod config;
pub mod engine;
pub mod error;
pub mod length;
pub mod packet;
pub mod sink;

pub use chunk_queue::ChunkQueue;
pub use config::FramerConfig;
pub use engine::StreamFramer;
pub use error::FramerError;
pub use length::BodyLength;
pub use packet::Packet;
pub use sink::PacketSink;

//! # Core Framing Components
//!
//! Low-level frame handling: the wire format, the codec, and stream assembly.
//!
//! This module provides the foundation for the protocol, turning raw byte
//! buffers into validated [`datagram::Datagram`] values and back.
//!
//! ## Components
//! - **FrameType**: reserved type codes and acknowledgment classification
//! - **Datagram**: immutable, fully-validated frame value
//! - **Codec**: header parsing, frame building, and a tokio codec for byte streams
//! - **Assembler**: incremental reassembly of frames from partial reads
//!
//! ## Wire Format
//! ```text
//! [Version(1)] [BodyLen(4)] [Type(1)] [Charset(10)] [CorrelationId(40)] [Body(N)]
//! ```
//! `BodyLen` is big-endian; the fixed prefix is 56 bytes.
//!
//! ## Security
//! - Declared body length is validated against a configurable ceiling
//!   before any allocation
//! - A `Datagram` can only be produced from a buffer that passed validation

pub mod assembler;
pub mod codec;
pub mod datagram;
pub mod frame_type;

//! # Datagram Protocol
//!
//! Binary wire-framing core for socket-based client/server messaging:
//! a fixed-layout header followed by a variable-length body, carrying
//! heartbeats, application requests, file-transfer chunks, acknowledgments,
//! and server-initiated pushes over a single byte stream.
//!
//! ## Wire Format
//! ```text
//! [Version(1)] [BodyLen(4)] [Type(1)] [Charset(10)] [CorrelationId(40)] [Body(N)]
//! ```
//!
//! ## Components
//! - [`core::frame_type`]: reserved type codes and acknowledgment rules
//! - [`core::datagram::Datagram`]: immutable, fully-validated frame value
//! - [`core::codec::FrameCodec`]: decode/encode between wire bytes and fields
//! - [`core::assembler::StreamAssembler`]: frame reassembly from partial reads
//! - [`protocol`]: ACK generation, heartbeats, and type-based routing
//!
//! ## Example
//! ```rust
//! use datagram_protocol::{frame_type, FrameCodec, StreamAssembler};
//!
//! # fn main() -> datagram_protocol::Result<()> {
//! let codec = FrameCodec::new();
//! let wire = codec.encode(1, frame_type::MVC, "UTF-8", &[0u8; 40], b"ping")?;
//!
//! let mut assembler = StreamAssembler::new();
//! for datagram in assembler.feed(&wire)? {
//!     assert_eq!(datagram.body(), b"ping");
//!     assert!(datagram.ack());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod utils;

pub use crate::core::assembler::StreamAssembler;
pub use crate::core::codec::{DatagramCodec, FrameCodec, CHARSET_LEN, CORRELATION_LEN, HEADER_LEN};
pub use crate::core::datagram::Datagram;
pub use crate::core::frame_type::{self, TypeRegistry};
pub use crate::error::{FrameDefect, ProtocolError, Result};

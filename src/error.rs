//! # Error Types
//!
//! Comprehensive error handling for the datagram framing core.
//!
//! This module defines all error variants that can occur while encoding,
//! decoding, or assembling frames, from low-level I/O errors to wire-format
//! violations.
//!
//! ## Error Categories
//! - **I/O Errors**: failures surfaced by a transport driving the codec
//! - **Frame Errors**: malformed headers, truncated streams, oversized bodies
//! - **Field Errors**: fixed-width header fields exceeding their width
//! - **Routing Errors**: frames with no registered handler
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use datagram_protocol::core::codec::FrameCodec;
//! use datagram_protocol::error::{ProtocolError, Result};
//!
//! fn decode_frame(buf: &[u8]) -> Result<usize> {
//!     let codec = FrameCodec::new();
//!     let datagram = codec.decode(buf)?;
//!     Ok(datagram.body_len())
//! }
//!
//! fn main() {
//!     match decode_frame(&[0u8; 4]) {
//!         Ok(len) => println!("body of {len} bytes"),
//!         Err(ProtocolError::MalformedFrame(defect)) => eprintln!("bad frame: {defect}"),
//!         Err(e) => eprintln!("error: {e}"),
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Dispatcher-related error messages
    pub const ERR_DISPATCHER_WRITE_LOCK: &str = "Failed to acquire write lock on dispatcher";
    pub const ERR_DISPATCHER_READ_LOCK: &str = "Failed to acquire read lock on dispatcher";

    /// Type-registry error messages
    pub const ERR_REGISTRY_WRITE_LOCK: &str = "Failed to acquire write lock on type registry";
    pub const ERR_REGISTRY_READ_LOCK: &str = "Failed to acquire read lock on type registry";
}

/// Structural defect found while parsing a frame.
///
/// Carried inside [`ProtocolError::MalformedFrame`] so callers can
/// distinguish an incomplete header from an internally inconsistent one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDefect {
    #[error("header incomplete: {got} of {need} bytes")]
    HeaderIncomplete { got: usize, need: usize },

    #[error("declared body length {declared} does not match actual body length {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("declared body length {declared} exceeds maximum {max}")]
    Oversized { declared: usize, max: usize },

    #[error("charset field contains non-ASCII bytes")]
    CharsetNotAscii,
}

// ProtocolError is the primary error type for all framing operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed frame: {0}")]
    MalformedFrame(FrameDefect),

    #[error("stream closed mid-frame with {0} bytes buffered")]
    TruncatedFrame(usize),

    #[error("{field} is {actual} bytes, exceeding its fixed width of {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("no handler registered for frame type {0}")]
    UnhandledType(u8),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ProtocolError {
    /// Whether this error invalidates an assembler for further use.
    ///
    /// Only a truncated stream does; every other failure is local to the
    /// frame that produced it.
    pub fn is_fatal_to_stream(&self) -> bool {
        matches!(self, ProtocolError::TruncatedFrame(_))
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

//! # Datagram
//!
//! The immutable value object representing one fully-decoded frame: the raw
//! wire bytes plus the header fields parsed out of them.
//!
//! A `Datagram` can only be produced by [`FrameCodec`](super::codec::FrameCodec),
//! which validates the buffer first. Once constructed it is never mutated,
//! so it is safe to share across threads and to hold for as long as the
//! consumer needs it.

use bytes::Bytes;
use std::fmt;

use super::codec::{CORRELATION_LEN, HEADER_LEN};
use super::frame_type;

/// One complete frame: fixed header plus variable body.
///
/// Borrowed accessors return immutable views tied to the datagram's
/// lifetime; `to_vec`/`body_to_vec` return fresh owned copies. Neither path
/// can be used to modify the underlying frame.
#[derive(Clone, PartialEq, Eq)]
pub struct Datagram {
    /// Complete frame bytes, header included
    raw: Bytes,
    version: u8,
    frame_type: u8,
    /// Charset with trailing padding already trimmed
    charset: String,
    correlation_id: [u8; CORRELATION_LEN],
    body_len: usize,
}

impl Datagram {
    /// Construct from fields the codec has already validated.
    ///
    /// `raw.len() == HEADER_LEN + body_len` must hold; the codec is the
    /// only caller and guarantees it.
    pub(crate) fn from_validated_parts(
        raw: Bytes,
        version: u8,
        frame_type: u8,
        charset: String,
        correlation_id: [u8; CORRELATION_LEN],
        body_len: usize,
    ) -> Self {
        debug_assert_eq!(raw.len(), HEADER_LEN + body_len);
        Self {
            raw,
            version,
            frame_type,
            charset,
            correlation_id,
            body_len,
        }
    }

    /// Protocol version byte.
    #[inline]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Raw type code. See [`frame_type`] for the reserved values.
    #[inline]
    pub fn frame_type(&self) -> u8 {
        self.frame_type
    }

    /// Text encoding of the body, trimmed of trailing padding.
    #[inline]
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Opaque correlation identifier, always exactly 40 bytes.
    #[inline]
    pub fn correlation_id(&self) -> &[u8; CORRELATION_LEN] {
        &self.correlation_id
    }

    /// Declared body length. Always equals `body().len()`.
    #[inline]
    pub fn body_len(&self) -> usize {
        self.body_len
    }

    /// Body bytes. Empty slice for a bodiless frame, never an option.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.raw[HEADER_LEN..]
    }

    /// The complete frame as it appeared on the wire, header included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Fresh owned copy of the complete frame.
    pub fn to_vec(&self) -> Vec<u8> {
        self.raw.to_vec()
    }

    /// Fresh owned copy of the body.
    pub fn body_to_vec(&self) -> Vec<u8> {
        self.body().to_vec()
    }

    /// Whether the receiver must answer this frame with an ACK.
    #[inline]
    pub fn ack(&self) -> bool {
        frame_type::requires_ack(self.frame_type)
    }
}

impl fmt::Debug for Datagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datagram")
            .field("version", &self.version)
            .field("frame_type", &self.frame_type)
            .field("charset", &self.charset)
            .field("body_len", &self.body_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::core::codec::FrameCodec;
    use crate::core::frame_type;

    #[test]
    fn accessors_reflect_the_encoded_fields() {
        let codec = FrameCodec::new();
        let datagram = codec
            .build(1, frame_type::MVC, "UTF-8", &[7u8; 40], b"hello")
            .unwrap();

        assert_eq!(datagram.version(), 1);
        assert_eq!(datagram.frame_type(), frame_type::MVC);
        assert_eq!(datagram.charset(), "UTF-8");
        assert_eq!(datagram.correlation_id(), &[7u8; 40]);
        assert_eq!(datagram.body(), b"hello");
        assert_eq!(datagram.body_len(), 5);
        assert!(datagram.ack());
    }

    #[test]
    fn owned_copies_are_independent_of_the_datagram() {
        let codec = FrameCodec::new();
        let datagram = codec
            .build(1, frame_type::FILE, "UTF-8", &[0u8; 40], b"chunk")
            .unwrap();

        let mut body = datagram.body_to_vec();
        body[0] = b'X';
        assert_eq!(datagram.body(), b"chunk");

        let mut raw = datagram.to_vec();
        raw[0] = 0xFF;
        assert_eq!(datagram.as_bytes()[0], 1);
    }

    #[test]
    fn bodiless_frame_has_empty_body() {
        let codec = FrameCodec::new();
        let datagram = codec
            .build(1, frame_type::HEARTBEAT, "UTF-8", &[0u8; 40], &[])
            .unwrap();

        assert_eq!(datagram.body(), &[] as &[u8]);
        assert_eq!(datagram.body_len(), 0);
        assert!(!datagram.ack());
    }
}

//! # Frame Codec
//!
//! Encoding and decoding of the wire format, plus a [`tokio_util`] codec so
//! the same frame logic can drive a `Framed` transport.
//!
//! ## Wire Format
//! ```text
//! [Version(1)] [BodyLen(4)] [Type(1)] [Charset(10)] [CorrelationId(40)] [Body(N)]
//! ```
//! `BodyLen` is a big-endian unsigned 32-bit integer counting only the body.
//! `Charset` is ASCII, padded on the right with NUL bytes; `CorrelationId`
//! is opaque and zero-padded when shorter than its field.
//!
//! Decoding and encoding are inverse operations: a frame built by
//! [`FrameCodec::encode`] decodes back to the same fields, modulo the
//! documented pad/trim rule for the two fixed-width fields.

use bytes::{BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

use crate::config::{CodecConfig, MAX_BODY_LEN};
use crate::core::datagram::Datagram;
use crate::error::{FrameDefect, ProtocolError, Result};

/// Fixed frame prefix: version, body length, type, charset, correlation id.
pub const HEADER_LEN: usize = 56;

/// Width of the charset field.
pub const CHARSET_LEN: usize = 10;

/// Width of the correlation id field.
pub const CORRELATION_LEN: usize = 40;

const VERSION_OFFSET: usize = 0;
const BODY_LEN_OFFSET: usize = 1;
const TYPE_OFFSET: usize = 5;
const CHARSET_OFFSET: usize = 6;
const CORRELATION_OFFSET: usize = 16;

/// Stateless frame encoder/decoder.
///
/// Carries a single piece of configuration, the body size ceiling, and no
/// mutable state: one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct FrameCodec {
    max_body_len: usize,
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameCodec {
    /// Codec with the default body size ceiling ([`MAX_BODY_LEN`]).
    pub fn new() -> Self {
        Self {
            max_body_len: MAX_BODY_LEN,
        }
    }

    /// Codec with a custom body size ceiling.
    pub fn with_max_body_len(max_body_len: usize) -> Self {
        Self { max_body_len }
    }

    /// Codec configured from a [`CodecConfig`] section.
    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            max_body_len: config.max_body_len,
        }
    }

    /// The configured body size ceiling.
    pub fn max_body_len(&self) -> usize {
        self.max_body_len
    }

    /// Decode one complete frame from `buffer`.
    ///
    /// The buffer must hold exactly one frame: a full header and a body of
    /// exactly the declared length. Anything else is a
    /// [`ProtocolError::MalformedFrame`] whose defect distinguishes an
    /// incomplete header from a length mismatch.
    pub fn decode(&self, buffer: &[u8]) -> Result<Datagram> {
        self.decode_owned(Bytes::copy_from_slice(buffer))
    }

    /// Decode a frame from an owned buffer without recopying it.
    pub(crate) fn decode_owned(&self, raw: Bytes) -> Result<Datagram> {
        if raw.len() < HEADER_LEN {
            return Err(malformed(FrameDefect::HeaderIncomplete {
                got: raw.len(),
                need: HEADER_LEN,
            }));
        }

        let declared = declared_body_len(&raw);
        self.check_declared(declared)?;

        let actual = raw.len() - HEADER_LEN;
        if declared != actual {
            return Err(malformed(FrameDefect::LengthMismatch { declared, actual }));
        }

        let charset_field = &raw[CHARSET_OFFSET..CHARSET_OFFSET + CHARSET_LEN];
        if !charset_field.is_ascii() {
            return Err(malformed(FrameDefect::CharsetNotAscii));
        }
        let charset = trim_charset(charset_field).to_string();

        let mut correlation_id = [0u8; CORRELATION_LEN];
        correlation_id.copy_from_slice(&raw[CORRELATION_OFFSET..CORRELATION_OFFSET + CORRELATION_LEN]);

        let version = raw[VERSION_OFFSET];
        let frame_type = raw[TYPE_OFFSET];

        trace!(version, frame_type, body_len = declared, "frame decoded");

        Ok(Datagram::from_validated_parts(
            raw,
            version,
            frame_type,
            charset,
            correlation_id,
            declared,
        ))
    }

    /// Serialize the logical fields of one frame into wire bytes.
    ///
    /// `charset` longer than its 10-byte field and `correlation_id` longer
    /// than its 40-byte field fail with [`ProtocolError::FieldTooLong`]
    /// rather than being silently truncated. Shorter values are padded:
    /// charset with NUL bytes, correlation id with zeros.
    pub fn encode(
        &self,
        version: u8,
        frame_type: u8,
        charset: &str,
        correlation_id: &[u8],
        body: &[u8],
    ) -> Result<Vec<u8>> {
        let charset_bytes = charset.as_bytes();
        if !charset_bytes.is_ascii() {
            return Err(malformed(FrameDefect::CharsetNotAscii));
        }
        if charset_bytes.len() > CHARSET_LEN {
            return Err(ProtocolError::FieldTooLong {
                field: "charset",
                max: CHARSET_LEN,
                actual: charset_bytes.len(),
            });
        }

        if correlation_id.len() > CORRELATION_LEN {
            return Err(ProtocolError::FieldTooLong {
                field: "correlation id",
                max: CORRELATION_LEN,
                actual: correlation_id.len(),
            });
        }

        self.check_declared(body.len())?;
        let body_len = u32::try_from(body.len()).map_err(|_| {
            malformed(FrameDefect::Oversized {
                declared: body.len(),
                max: u32::MAX as usize,
            })
        })?;

        let mut frame = Vec::with_capacity(HEADER_LEN + body.len());
        frame.push(version);
        frame.extend_from_slice(&body_len.to_be_bytes());
        frame.push(frame_type);
        frame.extend_from_slice(charset_bytes);
        frame.resize(CHARSET_OFFSET + CHARSET_LEN, 0);
        frame.extend_from_slice(correlation_id);
        frame.resize(HEADER_LEN, 0);
        frame.extend_from_slice(body);

        Ok(frame)
    }

    /// Encode and construct the [`Datagram`] in one step.
    ///
    /// This is the only public path that produces a `Datagram` from logical
    /// field values; a caller can never fabricate one from an unvalidated
    /// buffer.
    pub fn build(
        &self,
        version: u8,
        frame_type: u8,
        charset: &str,
        correlation_id: &[u8],
        body: &[u8],
    ) -> Result<Datagram> {
        let raw = Bytes::from(self.encode(version, frame_type, charset, correlation_id, body)?);

        let mut id = [0u8; CORRELATION_LEN];
        id[..correlation_id.len()].copy_from_slice(correlation_id);

        Ok(Datagram::from_validated_parts(
            raw,
            version,
            frame_type,
            charset.to_string(),
            id,
            body.len(),
        ))
    }

    /// Reject declared body lengths over the configured ceiling.
    pub(crate) fn check_declared(&self, declared: usize) -> Result<()> {
        if declared > self.max_body_len {
            warn!(declared, max = self.max_body_len, "oversized frame rejected");
            return Err(malformed(FrameDefect::Oversized {
                declared,
                max: self.max_body_len,
            }));
        }
        Ok(())
    }
}

fn malformed(defect: FrameDefect) -> ProtocolError {
    ProtocolError::MalformedFrame(defect)
}

/// Read the declared body length out of a buffered header.
///
/// Callers must have at least `BODY_LEN_OFFSET + 4` bytes buffered.
pub(crate) fn declared_body_len(header: &[u8]) -> usize {
    let mut len = [0u8; 4];
    len.copy_from_slice(&header[BODY_LEN_OFFSET..BODY_LEN_OFFSET + 4]);
    u32::from_be_bytes(len) as usize
}

fn trim_charset(field: &[u8]) -> &str {
    let end = field
        .iter()
        .rposition(|&b| b != 0 && b != b' ')
        .map_or(0, |pos| pos + 1);
    // Checked as ASCII by the caller
    std::str::from_utf8(&field[..end]).unwrap_or("")
}

/// [`tokio_util::codec`] adapter over [`FrameCodec`].
///
/// Plugs the frame format into `Framed` transports: partial input yields
/// `Ok(None)`, complete frames are split off the front of the read buffer
/// without copying the remainder.
#[derive(Debug, Clone, Default)]
pub struct DatagramCodec {
    codec: FrameCodec,
}

impl DatagramCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec(codec: FrameCodec) -> Self {
        Self { codec }
    }
}

impl Decoder for DatagramCodec {
    type Item = Datagram;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Datagram>> {
        if src.len() < HEADER_LEN {
            return Ok(None);
        }

        let declared = declared_body_len(src);
        self.codec.check_declared(declared)?;

        let frame_len = HEADER_LEN + declared;
        if src.len() < frame_len {
            // Grow the buffer up front so the transport can read the rest
            // of the frame in one pass.
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        let frame = src.split_to(frame_len).freeze();
        self.codec.decode_owned(frame).map(Some)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Datagram>> {
        match self.decode(src)? {
            Some(frame) => Ok(Some(frame)),
            None if src.is_empty() => Ok(None),
            None => Err(ProtocolError::TruncatedFrame(src.len())),
        }
    }
}

impl Encoder<Datagram> for DatagramCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Datagram, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(item.as_bytes().len());
        dst.put_slice(item.as_bytes());
        Ok(())
    }
}

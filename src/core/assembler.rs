//! # Stream Assembler
//!
//! Incremental reassembly of frames from a byte stream that delivers data
//! in arbitrary chunks.
//!
//! The assembler is a two-state machine: it waits for a complete header,
//! reads the declared body length out of it, then waits for the body. One
//! `feed` call can emit any number of frames, since a single read may carry
//! several coalesced frames or only a fragment of one.
//!
//! One assembler belongs to exactly one connection and must be driven
//! serially by that connection's read loop; it holds a cursor over a
//! growing buffer and is deliberately not `Sync`. `feed` never blocks:
//! waiting for more bytes is the transport's job.

use bytes::BytesMut;
use tracing::{debug, trace};

use crate::core::codec::{declared_body_len, FrameCodec, HEADER_LEN};
use crate::core::datagram::Datagram;
use crate::error::{FrameDefect, ProtocolError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    AwaitingBody { frame_len: usize },
}

/// Reassembles complete frames from partial reads.
#[derive(Debug)]
pub struct StreamAssembler {
    buf: BytesMut,
    state: State,
    codec: FrameCodec,
    /// Defect from a frame whose bytes were already consumed, reported on
    /// the next `feed` call so frames completed before it are not lost.
    deferred: Option<FrameDefect>,
}

impl Default for StreamAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAssembler {
    /// Assembler with the default codec configuration.
    pub fn new() -> Self {
        Self::with_codec(FrameCodec::new())
    }

    /// Assembler decoding through the given codec.
    pub fn with_codec(codec: FrameCodec) -> Self {
        Self {
            buf: BytesMut::new(),
            state: State::AwaitingHeader,
            codec,
            deferred: None,
        }
    }

    /// Append a chunk from the transport and drain every frame that is now
    /// complete, in wire order.
    ///
    /// Partial input suspends without output: an empty vec is not an error.
    /// A defect is local to its frame and never destroys frames that were
    /// already complete: frames assembled earlier in the same chunk are
    /// returned first and the error surfaces on the call after. An
    /// oversized declared length leaves the buffer untouched, so it is
    /// reported on every call until the caller gives up.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<Datagram>> {
        self.buf.extend_from_slice(chunk);

        if let Some(defect) = self.deferred.take() {
            return Err(ProtocolError::MalformedFrame(defect));
        }

        let mut frames = Vec::new();
        loop {
            match self.state {
                State::AwaitingHeader => {
                    if self.buf.len() < HEADER_LEN {
                        break;
                    }
                    let declared = declared_body_len(&self.buf);
                    if let Err(e) = self.codec.check_declared(declared) {
                        if frames.is_empty() {
                            return Err(e);
                        }
                        break;
                    }
                    self.state = State::AwaitingBody {
                        frame_len: HEADER_LEN + declared,
                    };
                }
                State::AwaitingBody { frame_len } => {
                    if self.buf.len() < frame_len {
                        break;
                    }
                    let raw = self.buf.split_to(frame_len).freeze();
                    self.state = State::AwaitingHeader;
                    match self.codec.decode_owned(raw) {
                        Ok(datagram) => {
                            trace!(
                                frame_type = datagram.frame_type(),
                                body_len = datagram.body_len(),
                                "frame assembled"
                            );
                            frames.push(datagram);
                        }
                        Err(e) => {
                            // The defective frame's bytes are consumed, so
                            // framing stays intact for whatever follows.
                            if frames.is_empty() {
                                return Err(e);
                            }
                            if let ProtocolError::MalformedFrame(defect) = e {
                                self.deferred = Some(defect);
                            }
                            break;
                        }
                    }
                }
            }
        }

        Ok(frames)
    }

    /// Bytes buffered toward the next frame.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// True when the assembler sits exactly on a frame boundary.
    pub fn is_idle(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the assembler when the connection closes.
    ///
    /// Closing between frames is clean; closing mid-frame reports the
    /// leftover bytes as a truncated frame.
    pub fn finish(self) -> Result<()> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            debug!(pending = self.buf.len(), "stream closed mid-frame");
            Err(ProtocolError::TruncatedFrame(self.buf.len()))
        }
    }
}

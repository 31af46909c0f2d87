//! Acknowledgment frames.
//!
//! A frame whose type requires confirmation is answered with an ACK frame
//! carrying the same correlation id and an empty body, so the sender can
//! pair the confirmation with its request.

use crate::config::DEFAULT_CHARSET;
use crate::core::codec::FrameCodec;
use crate::core::datagram::Datagram;
use crate::core::frame_type::{self, TypeRegistry};
use crate::error::Result;

/// Build the ACK answering `datagram`, or `None` when its type needs no
/// acknowledgment.
///
/// The ACK mirrors the received frame's version and correlation id. ACKs
/// themselves never require acknowledgment, so this can never loop.
pub fn ack_for(codec: &FrameCodec, datagram: &Datagram) -> Result<Option<Datagram>> {
    if !datagram.ack() {
        return Ok(None);
    }
    build_ack(codec, datagram).map(Some)
}

/// Like [`ack_for`], but also acknowledging application type codes
/// registered in `registry`.
pub fn ack_for_with_registry(
    codec: &FrameCodec,
    registry: &TypeRegistry,
    datagram: &Datagram,
) -> Result<Option<Datagram>> {
    if !registry.requires_ack(datagram.frame_type())? {
        return Ok(None);
    }
    build_ack(codec, datagram).map(Some)
}

fn build_ack(codec: &FrameCodec, datagram: &Datagram) -> Result<Datagram> {
    codec.build(
        datagram.version(),
        frame_type::ACK,
        DEFAULT_CHARSET,
        datagram.correlation_id(),
        &[],
    )
}

//! Heartbeat frames.
//!
//! Heartbeats are the smallest frame on the wire: an empty body and a
//! zeroed correlation id, since there is nothing to pair them with and
//! they are never acknowledged.

use crate::config::{DEFAULT_CHARSET, PROTOCOL_VERSION};
use crate::core::codec::{FrameCodec, CORRELATION_LEN};
use crate::core::datagram::Datagram;
use crate::core::frame_type;
use crate::error::Result;

/// Build a keep-alive frame.
pub fn heartbeat(codec: &FrameCodec) -> Result<Datagram> {
    codec.build(
        PROTOCOL_VERSION,
        frame_type::HEARTBEAT,
        DEFAULT_CHARSET,
        &[0u8; CORRELATION_LEN],
        &[],
    )
}

/// Whether a received frame is a heartbeat.
pub fn is_heartbeat(datagram: &Datagram) -> bool {
    frame_type::is_heartbeat(datagram.frame_type())
}

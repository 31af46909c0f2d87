//! # Frame Type Codes
//!
//! The reserved message type codes and the classification rules built on
//! them, including which types a receiver must acknowledge.
//!
//! Type codes `0..=4` are reserved by the protocol; everything from
//! [`APPLICATION_MIN`] upward belongs to the application. An
//! application-defined code never requires acknowledgment unless it is
//! registered in a [`TypeRegistry`].

use crate::error::{constants, ProtocolError, Result};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Keep-alive probe, empty body, never acknowledged
pub const HEARTBEAT: u8 = 0;

/// Application request/response handled by the MVC layer
pub const MVC: u8 = 1;

/// File-transfer chunk
pub const FILE: u8 = 2;

/// Acknowledgment of a previously received frame
pub const ACK: u8 = 3;

/// Server-initiated push to the client
pub const BACK: u8 = 4;

/// First type code available for application use
pub const APPLICATION_MIN: u8 = 5;

/// Whether a frame of this type must be acknowledged by the receiver.
///
/// True for MVC, FILE and BACK. HEARTBEAT carries nothing worth confirming
/// and acknowledging an ACK would loop forever, so both stay false, as does
/// every application-defined code.
#[inline]
pub fn requires_ack(frame_type: u8) -> bool {
    matches!(frame_type, MVC | FILE | BACK)
}

/// Whether this type code is an acknowledgment frame.
#[inline]
pub fn is_ack(frame_type: u8) -> bool {
    frame_type == ACK
}

/// Whether this type code is a heartbeat frame.
#[inline]
pub fn is_heartbeat(frame_type: u8) -> bool {
    frame_type == HEARTBEAT
}

/// Whether this type code is a file-transfer chunk.
#[inline]
pub fn is_file_transfer(frame_type: u8) -> bool {
    frame_type == FILE
}

/// Whether this type code is a server-initiated push.
#[inline]
pub fn is_server_push(frame_type: u8) -> bool {
    frame_type == BACK
}

/// Whether this type code is an MVC request/response.
#[inline]
pub fn is_mvc(frame_type: u8) -> bool {
    frame_type == MVC
}

/// Whether this type code is reserved by the protocol.
#[inline]
pub fn is_reserved(frame_type: u8) -> bool {
    frame_type < APPLICATION_MIN
}

/// Acknowledgment policy extended with application-registered type codes.
///
/// The reserved codes keep their fixed semantics; only codes at or above
/// [`APPLICATION_MIN`] can be registered. Cheap to clone and share across
/// connections.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    extra_acks: Arc<RwLock<HashSet<u8>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an application-defined type code as ack-requiring.
    ///
    /// Reserved codes are rejected: their acknowledgment behavior is part
    /// of the wire contract and cannot be changed.
    pub fn register_ack(&self, frame_type: u8) -> Result<()> {
        if is_reserved(frame_type) {
            return Err(ProtocolError::Custom(format!(
                "type {frame_type} is reserved and its ack policy cannot be changed"
            )));
        }

        let mut extra = self
            .extra_acks
            .write()
            .map_err(|_| ProtocolError::Custom(constants::ERR_REGISTRY_WRITE_LOCK.to_string()))?;

        extra.insert(frame_type);
        Ok(())
    }

    /// Remove a previously registered application type code.
    pub fn unregister_ack(&self, frame_type: u8) -> Result<()> {
        let mut extra = self
            .extra_acks
            .write()
            .map_err(|_| ProtocolError::Custom(constants::ERR_REGISTRY_WRITE_LOCK.to_string()))?;

        extra.remove(&frame_type);
        Ok(())
    }

    /// Whether a frame of this type must be acknowledged, honoring both the
    /// reserved set and any registered application codes.
    pub fn requires_ack(&self, frame_type: u8) -> Result<bool> {
        if requires_ack(frame_type) {
            return Ok(true);
        }

        let extra = self
            .extra_acks
            .read()
            .map_err(|_| ProtocolError::Custom(constants::ERR_REGISTRY_READ_LOCK.to_string()))?;

        Ok(extra.contains(&frame_type))
    }
}

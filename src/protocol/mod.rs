//! # Protocol Helpers
//!
//! Frame-level behavior built on the core: acknowledgment generation,
//! heartbeats, and type-based routing.
//!
//! ## Components
//! - **Ack**: builds the ACK frame answering a received datagram
//! - **Heartbeat**: keep-alive frames, never correlated or acknowledged
//! - **Dispatcher**: routes received frames to handlers by type code
//!
//! The application semantics behind each type code (MVC handling, file
//! chunk reassembly) live outside this crate; these helpers only cover the
//! behavior the wire contract itself prescribes.

pub mod ack;
pub mod dispatcher;
pub mod heartbeat;

#[cfg(test)]
mod tests;

// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::core::codec::{FrameCodec, CORRELATION_LEN};
use crate::core::frame_type::{self, TypeRegistry};
use crate::error::ProtocolError;
use crate::protocol::ack::{ack_for, ack_for_with_registry};
use crate::protocol::dispatcher::Dispatcher;
use crate::protocol::heartbeat::{heartbeat, is_heartbeat};

#[test]
fn test_ack_mirrors_version_and_correlation_id() {
    let codec = FrameCodec::new();
    let request = codec
        .build(2, frame_type::MVC, "UTF-8", &[0xAB; CORRELATION_LEN], b"request body")
        .expect("build request");

    let ack = ack_for(&codec, &request)
        .expect("ack generation should succeed")
        .expect("MVC frames require an ack");

    assert_eq!(ack.version(), 2);
    assert_eq!(ack.frame_type(), frame_type::ACK);
    assert_eq!(ack.correlation_id(), request.correlation_id());
    assert_eq!(ack.body_len(), 0);

    // An ACK of an ACK must never be produced
    assert!(ack_for(&codec, &ack).expect("ack of ack").is_none());
}

#[test]
fn test_heartbeat_and_ack_frames_are_never_acknowledged() {
    let codec = FrameCodec::new();
    let beat = heartbeat(&codec).expect("heartbeat");

    assert!(is_heartbeat(&beat));
    assert!(!beat.ack());
    assert_eq!(beat.body_len(), 0);
    assert_eq!(beat.correlation_id(), &[0u8; CORRELATION_LEN]);
    assert!(ack_for(&codec, &beat).expect("ack check").is_none());
}

#[test]
fn test_registered_application_type_gets_acked() {
    let codec = FrameCodec::new();
    let registry = TypeRegistry::new();
    let frame = codec
        .build(1, 77, "UTF-8", &[1u8; CORRELATION_LEN], b"app data")
        .expect("build");

    // Unregistered application codes are silent
    assert!(ack_for_with_registry(&codec, &registry, &frame)
        .expect("ack check")
        .is_none());

    registry.register_ack(77).expect("register");
    let ack = ack_for_with_registry(&codec, &registry, &frame)
        .expect("ack check")
        .expect("registered type requires ack");
    assert_eq!(ack.correlation_id(), frame.correlation_id());
}

#[test]
fn test_dispatcher_routes_by_frame_type() {
    let codec = FrameCodec::new();
    let dispatcher = Dispatcher::new();

    let reply_codec = codec.clone();
    dispatcher
        .register(frame_type::MVC, move |datagram| {
            let body = datagram.body_to_vec();
            reply_codec
                .build(
                    datagram.version(),
                    frame_type::BACK,
                    datagram.charset(),
                    datagram.correlation_id(),
                    &body,
                )
                .map(Some)
        })
        .expect("register MVC handler");

    dispatcher
        .register(frame_type::HEARTBEAT, |_| Ok(None))
        .expect("register heartbeat handler");

    let request = codec
        .build(1, frame_type::MVC, "UTF-8", &[3u8; CORRELATION_LEN], b"echo")
        .expect("build");
    let reply = dispatcher
        .dispatch(&request)
        .expect("dispatch should succeed")
        .expect("MVC handler replies");

    assert_eq!(reply.frame_type(), frame_type::BACK);
    assert_eq!(reply.body(), b"echo");

    let beat = heartbeat(&codec).expect("heartbeat");
    assert!(dispatcher.dispatch(&beat).expect("dispatch").is_none());
}

#[test]
fn test_dispatch_of_unregistered_type_fails() {
    let codec = FrameCodec::new();
    let dispatcher = Dispatcher::new();
    let frame = codec
        .build(1, 200, "UTF-8", &[0u8; CORRELATION_LEN], &[])
        .expect("build");

    match dispatcher.dispatch(&frame) {
        Err(ProtocolError::UnhandledType(200)) => {}
        other => panic!("Unexpected result: {other:?}"),
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Concurrency tests: one codec instance shared by many tasks
//!
//! The codec and the datagrams it produces carry no mutable state, so a
//! single instance must be safe to hammer from any number of threads.

use datagram_protocol::core::codec::{FrameCodec, CORRELATION_LEN};
use datagram_protocol::core::frame_type;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_encode_decode_heavy() {
    use tokio::task::JoinSet;

    let iterations = 5_000usize;
    let body_sizes = [0usize, 64, 512, 4096];
    let codec = Arc::new(FrameCodec::new());

    let mut tasks = JoinSet::new();
    for &size in &body_sizes {
        let codec = codec.clone();
        tasks.spawn(async move {
            for i in 0..iterations {
                let body = vec![((i + size) & 0xFF) as u8; size];
                let wire = codec
                    .encode(1, frame_type::MVC, "UTF-8", &[0u8; CORRELATION_LEN], &body)
                    .unwrap();
                let decoded = codec.decode(&wire).unwrap();
                assert_eq!(decoded.body_len(), size);
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn datagram_shared_across_tasks() {
    use tokio::task::JoinSet;

    let codec = FrameCodec::new();
    let datagram = Arc::new(
        codec
            .build(1, frame_type::FILE, "UTF-8", &[9u8; CORRELATION_LEN], b"shared body")
            .unwrap(),
    );

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let datagram = datagram.clone();
        tasks.spawn(async move {
            for _ in 0..10_000 {
                assert_eq!(datagram.body(), b"shared body");
                assert!(datagram.ack());
            }
        });
    }

    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }
}

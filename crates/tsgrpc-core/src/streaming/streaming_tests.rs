#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(false, false, StreamingMode::Unary)]
#[test_case(true, false, StreamingMode::ClientStreaming)]
#[test_case(false, true, StreamingMode::ServerStreaming)]
#[test_case(true, true, StreamingMode::BidiStreaming)]
fn StreamingMode___from_flags___classifies(client: bool, server: bool, expected: StreamingMode) {
    assert_eq!(StreamingMode::from_flags(client, server), expected);
}

#[test_case(false, false)]
#[test_case(true, false)]
#[test_case(false, true)]
#[test_case(true, true)]
fn StreamingMode___flags___roundtrip_through_classification(client: bool, server: bool) {
    let mode = StreamingMode::from_flags(client, server);

    assert_eq!(mode.client_streaming(), client);
    assert_eq!(mode.server_streaming(), server);
}

#[test]
fn StreamingMode___all_flag_combinations___cover_every_mode_once() {
    let mut seen = Vec::new();
    for client in [false, true] {
        for server in [false, true] {
            seen.push(StreamingMode::from_flags(client, server));
        }
    }

    for mode in StreamingMode::ALL {
        assert_eq!(seen.iter().filter(|m| **m == mode).count(), 1, "{mode}");
    }
}

#[test]
fn StreamingMode___is_unary___only_for_unary() {
    assert!(StreamingMode::Unary.is_unary());
    assert!(!StreamingMode::ClientStreaming.is_unary());
    assert!(!StreamingMode::ServerStreaming.is_unary());
    assert!(!StreamingMode::BidiStreaming.is_unary());
}

#[test]
fn StreamingMode___default___is_unary() {
    assert_eq!(StreamingMode::default(), StreamingMode::Unary);
}

#[test]
fn StreamingMode___display___is_human_readable() {
    assert_eq!(StreamingMode::BidiStreaming.to_string(), "bidi streaming");
}

//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random but
//! well-formed form rows and domain fragments for property testing.

#![cfg(test)]

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Strategy for generating key-value rows; some carry a blank key
pub fn key_value_row_strategy() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just(String::new()), "[A-Z][A-Z0-9_]{0,15}"],
        "[a-z0-9 ]{0,20}",
        0usize..64,
    )
        .prop_map(|(key, value, consecutive_key)| {
            json!({"key": key, "value": value, "consecutiveKey": consecutive_key})
        })
}

/// Strategy for generating key-value row arrays
pub fn key_value_rows_strategy() -> impl Strategy<Value = Vec<Value>> {
    vec(key_value_row_strategy(), 0..8)
}

/// Strategy for generating domain port fragments
///
/// Fragments carry a concrete port number, a protocol, and optionally a
/// non-empty name and an extra `servicePort` key, so they survive a
/// Model->Field->Model round trip unchanged.
pub fn port_fragment_strategy(port_field: &'static str) -> impl Strategy<Value = Value> {
    (
        0i64..=65535,
        prop_oneof![Just("tcp"), Just("udp")],
        option::of("[a-z]{1,12}"),
        option::of(0i64..100),
    )
        .prop_map(move |(port, protocol, name, service_port)| {
            let mut fragment = Map::new();
            fragment.insert(port_field.to_string(), Value::from(port));
            fragment.insert("protocol".to_string(), Value::from(protocol));
            if let Some(name) = name {
                fragment.insert("name".to_string(), Value::from(name));
            }
            if let Some(service_port) = service_port {
                fragment.insert("servicePort".to_string(), Value::from(service_port));
            }
            Value::Object(fragment)
        })
}

/// Strategy for generating domain port fragment arrays
pub fn port_fragments_strategy(port_field: &'static str) -> impl Strategy<Value = Vec<Value>> {
    vec(port_fragment_strategy(port_field), 0..6)
}

/// Strategy for generating docker volume rows, blank rows included
pub fn docker_volume_row_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({"containerPath": "", "hostPath": "", "mode": "", "consecutiveKey": 0})),
        (
            "/[a-z]{1,8}",
            "/[a-z]{1,8}",
            prop_oneof![Just("RO"), Just("RW")],
        )
            .prop_map(|(container_path, host_path, mode)| {
                json!({
                    "containerPath": container_path,
                    "hostPath": host_path,
                    "mode": mode,
                    "consecutiveKey": 0
                })
            }),
    ]
}

/// Strategy for generating docker volume row arrays
pub fn docker_volume_rows_strategy() -> impl Strategy<Value = Vec<Value>> {
    vec(docker_volume_row_strategy(), 0..8)
}

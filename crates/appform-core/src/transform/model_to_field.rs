//! Model to Field - hydrate domain fragments into editable form rows
//!
//! The inverse direction of [`super::field_to_model`]: domain fragments
//! come back as flat row objects with a synthetic `consecutiveKey`
//! assigned densely from 0 in sequence order. No row is ever dropped in
//! this direction and every converter here is infallible; numbers pass
//! through as numbers (the form layer tolerates numeric values directly).
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

use super::port_reference::{PortReference, PORT_TYPE_KEY};
use super::{with_consecutive_keys, CONSECUTIVE_KEY};
use serde_json::{Map, Value};

/// Join a role list back into the comma-separated form string.
pub fn accepted_resource_roles(roles: &[String]) -> String {
    roles.join(", ")
}

/// Join a URI list back into the comma-separated form string.
pub fn uris(uris: &[String]) -> String {
    uris.join(", ")
}

/// Join constraint segment lists back into the form string.
///
/// Segments join with `:`, specs with `", "` - the exact inverse of the
/// Field to Model parse.
pub fn constraints(constraints: &[Vec<String>]) -> String {
    constraints
        .iter()
        .map(|segments| segments.join(":"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Expand an environment mapping into sorted `{key, value}` rows.
///
/// Rows are ordered lexicographically by key with `consecutiveKey`
/// assigned in that order, so the UI row order is deterministic and
/// independent of mapping iteration order.
pub fn env(env: &Map<String, Value>) -> Vec<Value> {
    sorted_key_value_rows(env)
}

/// Expand a label mapping into sorted rows, like [`env`].
pub fn labels(labels: &Map<String, Value>) -> Vec<Value> {
    sorted_key_value_rows(labels)
}

/// Re-emit docker parameter fragments as rows with dense keys.
pub fn docker_parameters(parameters: &[Value]) -> Vec<Value> {
    with_consecutive_keys(parameters)
}

/// Re-emit docker volume fragments as rows with dense keys.
pub fn container_volumes(volumes: &[Value]) -> Vec<Value> {
    with_consecutive_keys(volumes)
}

/// Extract persistent volumes from a mixed volume list as form rows.
///
/// Only fragments carrying a `persistent` object are kept; docker-style
/// entries drop out. Dense re-indexing runs over the filtered subsequence,
/// never over the original positions.
pub fn local_volumes(volumes: &[Value]) -> Vec<Value> {
    let persistent: Vec<&Map<String, Value>> = volumes
        .iter()
        .filter_map(Value::as_object)
        .filter(|volume| volume.get("persistent").is_some_and(Value::is_object))
        .collect();

    persistent
        .into_iter()
        .enumerate()
        .map(|(index, volume)| {
            let mut row = volume.clone();
            let size = row
                .shift_remove("persistent")
                .and_then(|persistent| persistent.get("size").cloned())
                .unwrap_or(Value::Null);
            row.insert("persistentSize".to_string(), size);
            row.insert(CONSECUTIVE_KEY.to_string(), Value::from(index));
            Value::Object(row)
        })
        .collect()
}

/// Re-emit docker port mapping fragments as rows with dense keys.
pub fn docker_port_mappings(mappings: &[Value]) -> Vec<Value> {
    with_consecutive_keys(mappings)
}

/// Re-emit port definition fragments as rows with dense keys.
pub fn port_definitions(definitions: &[Value]) -> Vec<Value> {
    with_consecutive_keys(definitions)
}

/// Hydrate health-check fragments into form rows.
///
/// Injects the `portType` discriminant - `PORT_INDEX` when the fragment
/// carries `portIndex` (even under the `COMMAND` protocol), `PORT_NUMBER`
/// when it carries `port` instead, omitted when neither is present. Under
/// `COMMAND` the nested `command.value` unwraps back into a flat string.
pub fn health_checks(checks: &[Value]) -> Vec<Value> {
    checks
        .iter()
        .enumerate()
        .map(|(index, check)| {
            let mut row = Map::new();
            let Some(check) = check.as_object() else {
                row.insert(CONSECUTIVE_KEY.to_string(), Value::from(index));
                return Value::Object(row);
            };
            for (key, value) in check {
                row.insert(key.clone(), value.clone());
            }
            // after the copy, so a stale key on the fragment cannot win
            row.insert(CONSECUTIVE_KEY.to_string(), Value::from(index));
            if let Some(reference) = PortReference::from_model(check) {
                row.insert(PORT_TYPE_KEY.to_string(), reference.port_type().into());
            }
            if check.get("protocol").and_then(Value::as_str) == Some("COMMAND") {
                if let Some(command) = check.get("command").and_then(|command| command.get("value"))
                {
                    row.insert("command".to_string(), command.clone());
                }
            }
            Value::Object(row)
        })
        .collect()
}

fn sorted_key_value_rows(pairs: &Map<String, Value>) -> Vec<Value> {
    let mut keys: Vec<&String> = pairs.keys().collect();
    keys.sort();

    keys.into_iter()
        .enumerate()
        .map(|(index, key)| {
            let mut row = Map::new();
            row.insert("key".to_string(), Value::from(key.as_str()));
            row.insert("value".to_string(), pairs[key].clone());
            row.insert(CONSECUTIVE_KEY.to_string(), Value::from(index));
            Value::Object(row)
        })
        .collect()
}

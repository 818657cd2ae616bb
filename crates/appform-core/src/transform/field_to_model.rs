//! Field to Model - convert form rows into domain-model fragments
//!
//! Leaf converters coerce the form's string-typed scalars into typed
//! values; composite converters map row arrays into the nested shapes the
//! orchestration API consumes, pruning blank rows and stripping the
//! synthetic `consecutiveKey` identifiers along the way.
//!
//! Blank values normalize silently per the schema contract (pruned row,
//! `0` port, `null` name). Genuinely malformed numeric strings are not
//! defaulted: converters that parse numbers return an error instead.
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

use super::port_reference::{PortReference, PORT_TYPE_KEY};
use super::{is_blank, json_number, parse_float, parse_integer, CONSECUTIVE_KEY, VIP_KEY};
use crate::Result;
use serde_json::{json, Map, Value};

/// Health-check row fields stored as strings in the form but typed as
/// integers in the domain schema.
const HEALTH_CHECK_INTEGER_FIELDS: [&str; 4] = [
    "gracePeriodSeconds",
    "intervalSeconds",
    "timeoutSeconds",
    "maxConsecutiveFailures",
];

/// Parse the `cpus` field as a float.
pub fn cpus(value: &str) -> Result<f64> {
    parse_float("cpus", value)
}

/// Parse the `mem` field as a float (MiB).
pub fn mem(value: &str) -> Result<f64> {
    parse_float("mem", value)
}

/// Parse the `disk` field as a float (MiB).
pub fn disk(value: &str) -> Result<f64> {
    parse_float("disk", value)
}

/// Parse the `instances` field as a non-negative integer.
///
/// Fractional input truncates toward zero (`"4.5"` -> 4).
pub fn instances(value: &str) -> Result<u32> {
    let parsed = parse_float("instances", value)?;
    if parsed < 0.0 {
        return Err(crate::Error::NegativeValue {
            field: "instances",
            value: parsed,
        });
    }
    Ok(parsed.trunc() as u32)
}

/// Split the comma-separated resource roles string into a role list.
///
/// Segments are taken literally, whitespace included; an empty string
/// yields an empty list.
pub fn accepted_resource_roles(value: &str) -> Vec<String> {
    split_comma_list(value)
}

/// Split the comma-separated URIs string into a URI list.
pub fn uris(value: &str) -> Vec<String> {
    split_comma_list(value)
}

/// Coerce the force-pull-image checkbox: checked is `true`, anything else
/// (unchecked or absent) is `false`.
pub fn docker_force_pull_image(checked: Option<bool>) -> bool {
    checked.unwrap_or(false)
}

/// Coerce the privileged checkbox the same way as
/// [`docker_force_pull_image`].
pub fn docker_privileged(checked: Option<bool>) -> bool {
    checked.unwrap_or(false)
}

/// Parse a comma-separated constraints string into segment lists.
///
/// Each spec is one to three colon-separated segments
/// (`field:operator[:value]`). Blank specs are never inserted:
/// `"hostname:UNIQUE, atomic:LIKE:man"` ->
/// `[["hostname", "UNIQUE"], ["atomic", "LIKE", "man"]]`.
pub fn constraints(value: &str) -> Vec<Vec<String>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|spec| !spec.is_empty())
        .map(|spec| spec.split(':').map(String::from).collect())
        .collect()
}

/// Aggregate environment variable rows into a key-to-value mapping.
///
/// Rows with a blank key are dropped; later duplicate keys overwrite
/// earlier ones.
pub fn env(rows: &[Value]) -> Map<String, Value> {
    key_value_pairs(rows)
}

/// Aggregate label rows into a key-to-value mapping, like [`env`].
pub fn labels(rows: &[Value]) -> Map<String, Value> {
    key_value_pairs(rows)
}

/// Map docker parameter rows to an ordered `{key, value}` list.
///
/// Unlike [`env`], repeated keys are legal here (docker accepts the same
/// `--option` more than once), so the result stays a list in row order.
pub fn docker_parameters(rows: &[Value]) -> Vec<Value> {
    rows.iter()
        .filter_map(Value::as_object)
        .filter(|row| !is_blank(row.get("key")))
        .map(|row| {
            json!({
                "key": row.get("key").cloned().unwrap_or(Value::Null),
                "value": row.get("value").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

/// Map docker volume rows to domain volume fragments.
///
/// Rows where `containerPath`, `hostPath`, and `mode` are all blank are
/// pruned; survivors keep their fields with `consecutiveKey` stripped.
pub fn container_volumes(rows: &[Value]) -> Vec<Value> {
    rows.iter()
        .filter_map(Value::as_object)
        .filter(|row| {
            let blank = is_blank(row.get("containerPath"))
                && is_blank(row.get("hostPath"))
                && is_blank(row.get("mode"));
            if blank {
                log::trace!("pruning blank docker volume row");
            }
            !blank
        })
        .map(|row| {
            let mut volume = row.clone();
            volume.shift_remove(CONSECUTIVE_KEY);
            Value::Object(volume)
        })
        .collect()
}

/// Map persistent volume rows to domain volume fragments.
///
/// Rows where `containerPath` and `persistentSize` are both blank are
/// pruned. Survivors become `{containerPath, persistent: {size}, mode}`
/// with `mode` forced to `"RW"`: persistent volumes are read-write only by
/// domain convention.
pub fn local_volumes(rows: &[Value]) -> Result<Vec<Value>> {
    let mut volumes = Vec::new();
    for row in rows.iter().filter_map(Value::as_object) {
        if is_blank(row.get("containerPath")) && is_blank(row.get("persistentSize")) {
            log::trace!("pruning blank local volume row");
            continue;
        }
        // blank sizes normalize like absent ones; only malformed input errors
        let size = match row.get("persistentSize") {
            Some(Value::String(size)) if !size.is_empty() => {
                parse_float("persistentSize", size)?
            }
            Some(Value::Number(size)) => size.as_f64().unwrap_or_default(),
            _ => 0.0,
        };
        let mut volume = row.clone();
        volume.shift_remove(CONSECUTIVE_KEY);
        volume.shift_remove("persistentSize");
        volume.insert("persistent".to_string(), json!({ "size": json_number(size) }));
        volume.insert("mode".to_string(), json!("RW"));
        volumes.push(Value::Object(volume));
    }
    Ok(volumes)
}

/// Map docker port mapping rows to `container.docker.portMappings`
/// fragments. The port field is named `containerPort`.
pub fn docker_port_mappings(rows: &[Value]) -> Vec<Value> {
    port_rows(rows, "containerPort")
}

/// Map port definition rows to top-level `portDefinitions` fragments.
/// The port field is named `port`.
pub fn port_definitions(rows: &[Value]) -> Vec<Value> {
    port_rows(rows, "port")
}

/// Shared rule set for both port row kinds.
///
/// `consecutiveKey` and `vip` are stripped unconditionally; the port field
/// defaults to `0` when absent or `null`; a present-but-empty `name`
/// becomes `null` while an absent `name` stays absent. Everything else
/// passes through with key order preserved.
fn port_rows(rows: &[Value], port_field: &str) -> Vec<Value> {
    rows.iter()
        .filter_map(Value::as_object)
        .map(|row| {
            let mut mapping = row.clone();
            mapping.shift_remove(CONSECUTIVE_KEY);
            mapping.shift_remove(VIP_KEY);
            if matches!(mapping.get(port_field), None | Some(Value::Null)) {
                log::debug!("defaulting missing {port_field} to 0");
                mapping.insert(port_field.to_string(), Value::from(0));
            }
            let blank_name =
                matches!(mapping.get("name"), Some(Value::String(name)) if name.is_empty());
            if blank_name {
                mapping.insert("name".to_string(), Value::Null);
            }
            Value::Object(mapping)
        })
        .collect()
}

/// Map health check rows to domain health-check fragments.
///
/// String-typed duration and failure counters parse to integers. The port
/// reference is decoded from the row's `portType` discriminant; under the
/// `COMMAND` protocol the flat `command` string wraps as `{value}` and
/// `path` plus both port fields drop out.
pub fn health_checks(rows: &[Value]) -> Result<Vec<Value>> {
    rows.iter()
        .filter_map(Value::as_object)
        .map(health_check)
        .collect()
}

fn health_check(row: &Map<String, Value>) -> Result<Value> {
    let mut check = row.clone();
    check.shift_remove(CONSECUTIVE_KEY);

    for field in HEALTH_CHECK_INTEGER_FIELDS {
        let Some(value) = check.get(field) else {
            continue;
        };
        // blank counters normalize to omission; only malformed input errors
        if is_blank(Some(value)) {
            check.shift_remove(field);
            continue;
        }
        let parsed = parse_integer(field, value)?;
        check.insert(field.to_string(), Value::from(parsed));
    }

    let reference = PortReference::from_form(&check)?;
    check.shift_remove(PORT_TYPE_KEY);
    check.shift_remove("port");
    check.shift_remove("portIndex");

    if check.get("protocol").and_then(Value::as_str) == Some("COMMAND") {
        if let Some(command) = check.shift_remove("command") {
            check.insert("command".to_string(), json!({ "value": command }));
        }
        check.shift_remove("path");
    } else {
        check.shift_remove("command");
        if let Some(reference) = reference {
            reference.write_model(&mut check);
        }
    }

    Ok(Value::Object(check))
}

/// Aggregate `{key, value}` rows into a mapping, dropping blank keys.
fn key_value_pairs(rows: &[Value]) -> Map<String, Value> {
    let mut pairs = Map::new();
    for row in rows.iter().filter_map(Value::as_object) {
        let Some(key) = row.get("key").and_then(Value::as_str) else {
            continue;
        };
        if key.is_empty() {
            log::trace!("pruning key-value row with blank key");
            continue;
        }
        pairs.insert(
            key.to_string(),
            row.get("value").cloned().unwrap_or(Value::Null),
        );
    }
    pairs
}

fn split_comma_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(String::from).collect()
}

//! Transform layer for converting between form rows and domain fragments
//!
//! Two pure function groups compose the layer: [`field_to_model`] converts
//! form-representation fragments into domain-model fragments, and
//! [`model_to_field`] is the inverse, injecting synthetic `consecutiveKey`
//! row identifiers for UI list reconciliation.
//!
//! Every function is stateless and synchronous: it takes an input value and
//! returns a new output value with no shared mutable state and no I/O. The
//! two directions never call each other.
//!
//! Rows and fragments are `serde_json::Map` objects. Transforms are written
//! copy-all-then-overwrite so that unknown keys survive conversion, which
//! keeps the layer forward compatible with schema additions.
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

pub mod field_to_model;
pub mod model_to_field;
pub mod port_reference;

use serde_json::{Map, Value};

pub use port_reference::PortReference;

/// Form-row key holding the synthetic per-row identifier.
///
/// Assigned densely from 0 during Model->Field conversion and stripped
/// during Field->Model conversion. Never part of the domain schema.
pub const CONSECUTIVE_KEY: &str = "consecutiveKey";

/// UI-derived virtual-IP hint on port rows. Not part of the domain schema.
pub(crate) const VIP_KEY: &str = "vip";

/// True when a field is absent, `null`, or an empty string.
///
/// This is the blank test used by the pruning rules: a row is dropped when
/// the union of its tracked fields reduces to blank values.
pub(crate) fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Clone each fragment into a row carrying a dense `consecutiveKey`.
///
/// Keys are assigned 0..n in sequence order regardless of the input; all
/// fragment fields pass through unchanged, unknown keys included. Non-object
/// entries produce a row holding only the key.
pub(crate) fn with_consecutive_keys(fragments: &[Value]) -> Vec<Value> {
    fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            let mut row = Map::new();
            if let Some(fields) = fragment.as_object() {
                for (key, value) in fields {
                    row.insert(key.clone(), value.clone());
                }
            }
            // after the copy, so a stale key on the fragment cannot win
            row.insert(CONSECUTIVE_KEY.to_string(), Value::from(index));
            Value::Object(row)
        })
        .collect()
}

/// Parse a string field as a finite float.
///
/// Standard float parsing on the trimmed input; anything else, including
/// the empty string and non-finite literals, is a [`Error::NumberFormat`].
/// Malformed numbers are never silently defaulted.
pub(crate) fn parse_float(field: &'static str, value: &str) -> crate::Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(crate::Error::NumberFormat {
            field,
            value: value.to_string(),
        }),
    }
}

/// Parse a row field as an integer, truncating toward zero.
///
/// Accepts numbers as-is and string-typed numerics the way the form stores
/// them (`"300"`, `"4.5"` -> 4).
pub(crate) fn parse_integer(field: &'static str, value: &Value) -> crate::Result<i64> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(|float| float.trunc() as i64)
            .ok_or_else(|| crate::Error::NumberFormat {
                field,
                value: number.to_string(),
            }),
        Value::String(string) => parse_float(field, string).map(|float| float.trunc() as i64),
        other => Err(crate::Error::NumberFormat {
            field,
            value: other.to_string(),
        }),
    }
}

/// Collapse a whole-valued float to a JSON integer.
///
/// The orchestration API serializes `{size: 10}`, not `{size: 10.0}`, so
/// parsed floats that carry no fraction are emitted as integers.
pub(crate) fn json_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!("x"))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(false))));
    }

    #[test]
    fn test_with_consecutive_keys_density() {
        let rows = with_consecutive_keys(&[json!({"a": 1}), json!({"b": 2}), json!({})]);
        let keys: Vec<_> = rows.iter().map(|row| row[CONSECUTIVE_KEY].clone()).collect();
        assert_eq!(keys, vec![json!(0), json!(1), json!(2)]);
        assert_eq!(rows[0]["a"], json!(1));
        assert_eq!(rows[1]["b"], json!(2));
    }

    #[test]
    fn test_with_consecutive_keys_overrides_stale_keys() {
        let rows = with_consecutive_keys(&[
            json!({"consecutiveKey": 7, "a": 1}),
            json!({"a": 2, "consecutiveKey": 3}),
        ]);
        assert_eq!(rows[0][CONSECUTIVE_KEY], json!(0));
        assert_eq!(rows[1][CONSECUTIVE_KEY], json!(1));
    }

    #[test]
    fn test_parse_float_rejects_garbage() {
        assert_eq!(parse_float("cpus", "434.55"), Ok(434.55));
        assert_eq!(parse_float("cpus", " 33 "), Ok(33.0));
        assert!(parse_float("cpus", "").is_err());
        assert!(parse_float("cpus", "many").is_err());
        assert!(parse_float("cpus", "NaN").is_err());
    }

    #[test]
    fn test_parse_integer_truncates() {
        assert_eq!(parse_integer("portIndex", &json!("4.5")), Ok(4));
        assert_eq!(parse_integer("portIndex", &json!(7)), Ok(7));
        assert_eq!(parse_integer("portIndex", &json!("300")), Ok(300));
        assert!(parse_integer("portIndex", &json!(true)).is_err());
        assert!(parse_integer("portIndex", &json!("")).is_err());
    }

    #[test]
    fn test_json_number_collapses_whole_floats() {
        assert_eq!(json_number(10.0), json!(10));
        assert_eq!(json_number(0.5), json!(0.5));
        assert_eq!(json_number(-3.0), json!(-3));
    }

    mod properties {
        use crate::proptest_strategies::*;
        use crate::transform::{field_to_model, is_blank, model_to_field, CONSECUTIVE_KEY};
        use proptest::prelude::*;
        use serde_json::Value;

        proptest! {
            #[test]
            fn port_definition_keys_are_dense(fragments in port_fragments_strategy("port")) {
                let rows = model_to_field::port_definitions(&fragments);
                for (index, row) in rows.iter().enumerate() {
                    prop_assert_eq!(&row[CONSECUTIVE_KEY], &Value::from(index));
                }
            }

            #[test]
            fn port_mappings_round_trip(fragments in port_fragments_strategy("containerPort")) {
                let rows = model_to_field::docker_port_mappings(&fragments);
                prop_assert_eq!(field_to_model::docker_port_mappings(&rows), fragments);
            }

            #[test]
            fn container_volumes_round_trip(rows in docker_volume_rows_strategy()) {
                let fragments = field_to_model::container_volumes(&rows);
                let hydrated = model_to_field::container_volumes(&fragments);
                prop_assert_eq!(field_to_model::container_volumes(&hydrated), fragments);
            }

            #[test]
            fn blank_volume_rows_are_pruned(rows in docker_volume_rows_strategy()) {
                let blank = rows
                    .iter()
                    .filter_map(Value::as_object)
                    .filter(|row| {
                        is_blank(row.get("containerPath"))
                            && is_blank(row.get("hostPath"))
                            && is_blank(row.get("mode"))
                    })
                    .count();
                let fragments = field_to_model::container_volumes(&rows);
                prop_assert_eq!(fragments.len(), rows.len() - blank);
                for fragment in &fragments {
                    prop_assert!(!is_blank(fragment.get("containerPath")));
                    prop_assert!(fragment.get(CONSECUTIVE_KEY).is_none());
                }
            }

            #[test]
            fn env_rows_come_back_sorted_and_dense(rows in key_value_rows_strategy()) {
                let env = field_to_model::env(&rows);
                prop_assert!(!env.contains_key(""));

                let hydrated = model_to_field::env(&env);
                let keys: Vec<&str> = hydrated
                    .iter()
                    .map(|row| row["key"].as_str().unwrap())
                    .collect();
                let mut sorted = keys.clone();
                sorted.sort();
                prop_assert_eq!(&keys, &sorted);
                for (index, row) in hydrated.iter().enumerate() {
                    prop_assert_eq!(&row[CONSECUTIVE_KEY], &Value::from(index));
                }
            }
        }
    }
}

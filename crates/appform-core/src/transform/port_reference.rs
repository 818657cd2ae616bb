//! Tagged union for the health-check port reference
//!
//! A health check points at the port it probes in one of two ways: by a
//! literal port number (`port`) or by an index into the app's port list
//! (`portIndex`). The domain schema carries whichever field applies; the
//! form representation carries both candidates plus a `portType`
//! discriminant so the UI can switch between them without losing input.
//!
//! Modeling the pair as one tagged union keeps the "which field is present"
//! branching in a single decode/encode pair instead of at every call site.
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

use super::{is_blank, parse_integer};
use crate::Result;
use serde_json::{Map, Value};

/// Form-row key holding the port reference discriminant.
pub const PORT_TYPE_KEY: &str = "portType";

/// Discriminant value selecting the `portIndex` field.
pub const PORT_INDEX_TAG: &str = "PORT_INDEX";

/// Discriminant value selecting the `port` field.
pub const PORT_NUMBER_TAG: &str = "PORT_NUMBER";

/// The port a health check probes, by number or by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortReference {
    /// A literal host port number
    ByPortNumber(i64),
    /// An index into the app's port mapping list
    ByPortIndex(i64),
}

impl PortReference {
    /// Decode the reference from a form row.
    ///
    /// The row's `portType` discriminant selects which candidate field to
    /// read; an absent discriminant defaults to `PORT_INDEX`. Returns
    /// `None` when the selected field is blank.
    pub fn from_form(row: &Map<String, Value>) -> Result<Option<Self>> {
        let by_number =
            row.get(PORT_TYPE_KEY).and_then(Value::as_str) == Some(PORT_NUMBER_TAG);
        let field = if by_number { "port" } else { "portIndex" };
        let value = row.get(field);
        if is_blank(value) {
            return Ok(None);
        }
        let Some(value) = value else {
            return Ok(None);
        };
        let number = parse_integer(field, value)?;
        Ok(Some(if by_number {
            PortReference::ByPortNumber(number)
        } else {
            PortReference::ByPortIndex(number)
        }))
    }

    /// Decode the reference from a domain fragment by field presence.
    ///
    /// `portIndex` wins when both fields appear, matching the schema's
    /// precedence (an index reference may coexist with a stale `port`).
    pub fn from_model(fragment: &Map<String, Value>) -> Option<Self> {
        if let Some(index) = fragment.get("portIndex").and_then(Value::as_i64) {
            return Some(PortReference::ByPortIndex(index));
        }
        fragment
            .get("port")
            .and_then(Value::as_i64)
            .map(PortReference::ByPortNumber)
    }

    /// The `portType` discriminant this reference encodes as.
    pub fn port_type(&self) -> &'static str {
        match self {
            PortReference::ByPortNumber(_) => PORT_NUMBER_TAG,
            PortReference::ByPortIndex(_) => PORT_INDEX_TAG,
        }
    }

    /// Write the selected port field into a domain fragment.
    pub fn write_model(&self, fragment: &mut Map<String, Value>) {
        match self {
            PortReference::ByPortNumber(port) => {
                fragment.insert("port".to_string(), Value::from(*port));
            }
            PortReference::ByPortIndex(index) => {
                fragment.insert("portIndex".to_string(), Value::from(*index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_from_form_defaults_to_port_index() {
        let reference = PortReference::from_form(&row(json!({"portIndex": "1"})))
            .unwrap()
            .unwrap();
        assert_eq!(reference, PortReference::ByPortIndex(1));
        assert_eq!(reference.port_type(), PORT_INDEX_TAG);
    }

    #[test]
    fn test_from_form_honors_discriminant() {
        let reference = PortReference::from_form(&row(json!({
            "portType": "PORT_NUMBER",
            "port": "8080",
            "portIndex": "0"
        })))
        .unwrap()
        .unwrap();
        assert_eq!(reference, PortReference::ByPortNumber(8080));
    }

    #[test]
    fn test_from_form_blank_field_is_none() {
        assert_eq!(PortReference::from_form(&row(json!({}))).unwrap(), None);
        assert_eq!(
            PortReference::from_form(&row(json!({"portIndex": ""}))).unwrap(),
            None
        );
        assert_eq!(
            PortReference::from_form(&row(json!({"portType": "PORT_NUMBER", "port": null})))
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_from_form_rejects_garbage() {
        assert!(PortReference::from_form(&row(json!({"portIndex": "first"}))).is_err());
    }

    #[test]
    fn test_from_model_prefers_port_index() {
        let reference = PortReference::from_model(&row(json!({"portIndex": 1, "port": 8080})));
        assert_eq!(reference, Some(PortReference::ByPortIndex(1)));

        let reference = PortReference::from_model(&row(json!({"port": 8080})));
        assert_eq!(reference, Some(PortReference::ByPortNumber(8080)));

        assert_eq!(PortReference::from_model(&row(json!({"path": "/"}))), None);
    }

    #[test]
    fn test_write_model() {
        let mut fragment = Map::new();
        PortReference::ByPortIndex(2).write_model(&mut fragment);
        assert_eq!(fragment.get("portIndex"), Some(&json!(2)));
        assert_eq!(fragment.get("port"), None);
    }
}

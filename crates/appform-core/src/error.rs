//! Error types for the appform core library
//!
//! The transform layer normalizes blank values silently (pruned rows,
//! defaulted ports, `null` names), so the only failure it can surface is a
//! genuinely malformed numeric string in a field that must hold a number.
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for appform transforms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A form field that must hold a number carried a non-numeric string
    #[error("Invalid number in field '{field}': {value:?}")]
    NumberFormat { field: &'static str, value: String },

    /// A numeric field that must be non-negative carried a negative value
    #[error("Negative value in field '{field}': {value}")]
    NegativeValue { field: &'static str, value: f64 },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format_message() {
        let err = Error::NumberFormat {
            field: "instances",
            value: "many".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid number in field 'instances': \"many\""
        );
    }

    #[test]
    fn test_negative_value_message() {
        let err = Error::NegativeValue {
            field: "instances",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "Negative value in field 'instances': -2");
    }
}

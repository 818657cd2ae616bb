//! Appform Core - bidirectional app-form transforms
//!
//! This crate converts between two representations of an application
//! definition:
//!
//! - the **form representation**: flat arrays of row objects optimized for
//!   interactive editing, with string-typed numeric fields and synthetic
//!   `consecutiveKey` row identifiers used for UI list reconciliation, and
//! - the **domain model representation**: the typed, nested JSON shape an
//!   orchestration API consumes, free of any editing metadata.
//!
//! # Main Components
//!
//! - **Error Handling**: error types using `thiserror`
//! - **Field to Model**: convert form rows into domain fragments
//! - **Model to Field**: hydrate domain fragments back into form rows
//! - **Volume Constants**: closed enumerations for volume type/status tags
//!
//! # Example
//!
//! ```
//! use appform_core::transform::field_to_model;
//! use serde_json::json;
//!
//! fn example() -> appform_core::Result<()> {
//!     let cpus = field_to_model::cpus("0.5")?;
//!     assert_eq!(cpus, 0.5);
//!
//!     let env = field_to_model::env(&[
//!         json!({"key": "LANG", "value": "en_US", "consecutiveKey": 0}),
//!     ]);
//!     assert_eq!(env.get("LANG"), Some(&json!("en_US")));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod transform;
pub mod volumes;

mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use transform::{field_to_model, model_to_field, PortReference, CONSECUTIVE_KEY};
pub use volumes::{VolumeStatus, VolumeType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

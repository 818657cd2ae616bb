//! Volume type and status tags shared with the orchestration API
//!
//! These are closed enumerations of the wire-level tags the orchestration
//! schema uses for volumes. They round-trip through serde to the exact
//! strings the API expects.
//!
//! Copyright (c) 2025 Appform Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of volume attached to an application container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VolumeType {
    /// Host-path bind mount managed by the container runtime
    Docker,
    /// Persistent local disk reserved on the agent
    Persistent,
    /// Volume backed by an external storage provider
    External,
}

impl VolumeType {
    /// The wire tag for this volume type
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeType::Docker => "DOCKER",
            VolumeType::Persistent => "PERSISTENT",
            VolumeType::External => "EXTERNAL",
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attachment status reported for a persistent volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeStatus {
    Attached,
    Detached,
    Unavailable,
}

impl VolumeStatus {
    /// The wire tag for this volume status
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeStatus::Attached => "Attached",
            VolumeStatus::Detached => "Detached",
            VolumeStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_type_wire_tags() {
        assert_eq!(serde_json::to_value(VolumeType::Docker).unwrap(), json!("DOCKER"));
        assert_eq!(
            serde_json::to_value(VolumeType::Persistent).unwrap(),
            json!("PERSISTENT")
        );
        assert_eq!(
            serde_json::to_value(VolumeType::External).unwrap(),
            json!("EXTERNAL")
        );
    }

    #[test]
    fn test_volume_type_round_trip() {
        for tag in ["DOCKER", "PERSISTENT", "EXTERNAL"] {
            let volume_type: VolumeType = serde_json::from_value(json!(tag)).unwrap();
            assert_eq!(volume_type.as_str(), tag);
        }
    }

    #[test]
    fn test_volume_status_wire_tags() {
        assert_eq!(VolumeStatus::Attached.as_str(), "Attached");
        assert_eq!(VolumeStatus::Detached.as_str(), "Detached");
        assert_eq!(VolumeStatus::Unavailable.as_str(), "Unavailable");
        assert_eq!(
            serde_json::to_value(VolumeStatus::Unavailable).unwrap(),
            json!("Unavailable")
        );
    }
}

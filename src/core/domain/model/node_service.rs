//! Domain model for node services from the `/nodes/{node}/services` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A system service managed by Proxmox on a node (e.g., `pveproxy`, `corosync`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeService {
    /// Service identifier.
    pub service: String,
    /// Unit name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Current state (e.g., "running", "stopped").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

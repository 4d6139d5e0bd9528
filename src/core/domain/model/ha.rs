//! Domain models for cluster high-availability groups and resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An HA group from `/cluster/ha/groups`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HaGroup {
    /// Group identifier.
    pub group: String,
    /// Member nodes with optional priorities (e.g., "pve1:2,pve2:1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<String>,
    /// Resources may only run on member nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted: Option<u8>,
    /// Resources do not move back when a higher priority node returns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nofailback: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An HA-managed resource from `/cluster/ha/resources`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HaResource {
    /// Resource id (e.g., "vm:100").
    pub sid: String,
    /// Group the resource is bound to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Requested state (e.g., "started", "stopped", "ignored").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_restart: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_relocate: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

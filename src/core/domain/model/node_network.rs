//! Domain model for node network interfaces from the `/nodes/{node}/network` endpoint.

use crate::core::domain::value_object::serde_helpers::int_bool;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A network interface configured on a node (physical NIC, bridge, bond, VLAN...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NetworkInterface {
    /// Interface name (e.g., "vmbr0", "eno1").
    pub iface: String,
    /// Interface type (e.g., "bridge", "eth", "bond").
    #[serde(rename = "type")]
    pub iface_type: String,
    /// Whether the interface is currently up.
    #[serde(default, with = "int_bool")]
    pub active: bool,
    /// Whether the interface is started at boot.
    #[serde(default, with = "int_bool")]
    pub autostart: bool,
    /// IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// IPv4 address with prefix length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    /// Default IPv4 gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Bridge member ports, space separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_ports: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

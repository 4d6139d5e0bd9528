//! Denormalized inventory records produced by the enumerators.
//!
//! Each item wraps the record the API returned and adds the joined data,
//! serialized side by side so the raw JSON output reads like the API
//! record with extra keys.

use crate::core::domain::model::{
    ha::{HaGroup, HaResource},
    node_list_item::NodeListItem,
    node_network::NetworkInterface,
    node_service::NodeService,
    storage::{ContentEntry, StoragePool},
    vm::VmListItem,
};
use serde::Serialize;

/// A cluster node, optionally enriched with network and service details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeInventoryItem {
    #[serde(flatten)]
    pub node: NodeListItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Vec<NetworkInterface>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<NodeService>>,
}

/// A storage pool with its content listing.
///
/// `node` is set only for pools that are not shared; a shared pool is listed once
/// for the whole cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageInventoryItem {
    #[serde(flatten)]
    pub pool: StoragePool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    pub contents: Vec<ContentEntry>,
}

/// A virtual machine with the disks that belong to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VmInventoryItem {
    #[serde(flatten)]
    pub vm: VmListItem,
    pub disks: Vec<ContentEntry>,
}

/// An HA group with the resources bound to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HaGroupInventoryItem {
    #[serde(flatten)]
    pub group: HaGroup,
    pub resources: Vec<HaResource>,
}

//! The slice of the Proxmox VE API the enumerators depend on.

use crate::core::domain::{
    error::ProxmoxResult,
    model::{
        ha::{HaGroup, HaResource},
        node_list_item::NodeListItem,
        node_network::NetworkInterface,
        node_service::NodeService,
        storage::{ContentEntry, ContentType, StoragePool},
        vm::VmListItem,
    },
};
use async_trait::async_trait;

/// Read access to cluster resources.
///
/// Implemented by [`crate::ProxmoxClient`]; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PveApi: Send + Sync {
    /// `GET /nodes`
    async fn nodes(&self) -> ProxmoxResult<Vec<NodeListItem>>;

    /// `GET /nodes/{node}/network`
    async fn node_network(&self, node: &str) -> ProxmoxResult<Vec<NetworkInterface>>;

    /// `GET /nodes/{node}/services`
    async fn node_services(&self, node: &str) -> ProxmoxResult<Vec<NodeService>>;

    /// `GET /nodes/{node}/qemu`
    async fn vms(&self, node: &str) -> ProxmoxResult<Vec<VmListItem>>;

    /// `GET /nodes/{node}/storage`, optionally restricted to pools holding `content`.
    async fn storages(
        &self,
        node: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<StoragePool>>;

    /// `GET /nodes/{node}/storage/{storage}/content`, optionally filtered by content type.
    async fn storage_content(
        &self,
        node: &str,
        storage: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<ContentEntry>>;

    /// `GET /cluster/ha/groups`
    async fn ha_groups(&self) -> ProxmoxResult<Vec<HaGroup>>;

    /// `GET /cluster/ha/resources`
    async fn ha_resources(&self) -> ProxmoxResult<Vec<HaResource>>;
}

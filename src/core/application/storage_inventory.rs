//! Storage enumeration: every storage pool of the cluster with its content.

use crate::core::{
    application::{checkpoint, pve_api::PveApi},
    domain::{
        error::ProxmoxResult,
        model::inventory::StorageInventoryItem,
        service::storage_tagging::{Admission, StorageTagger},
    },
};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

/// Lists the storage pools of the cluster with their content listings.
///
/// Node-local pools are listed once per node and tagged with it. Shared pools
/// are listed once, through the first node (in `/nodes` order) reporting them.
pub async fn list_storage<A>(
    api: &A,
    cancel: &CancellationToken,
) -> ProxmoxResult<Vec<StorageInventoryItem>>
where
    A: PveApi + ?Sized,
{
    checkpoint(cancel)?;
    let nodes = api.nodes().await?;

    let mut tagger = StorageTagger::new();
    let mut storage = Vec::new();

    for node in &nodes {
        checkpoint(cancel)?;
        for pool in api.storages(&node.node, None).await? {
            let owner = match tagger.admit(&node.node, &pool) {
                Admission::Duplicate => {
                    debug!("shared storage {} already listed, skipping on {}", pool.storage, node.node);
                    continue;
                }
                Admission::Shared => None,
                Admission::Local { node } => Some(node),
            };

            checkpoint(cancel)?;
            let contents = api.storage_content(&node.node, &pool.storage, None).await?;
            storage.push(StorageInventoryItem {
                pool,
                node: owner,
                contents,
            });
        }
    }

    info!("found {} storage pools on {} nodes", storage.len(), nodes.len());
    Ok(storage)
}

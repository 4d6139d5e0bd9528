//! VM enumeration: every VM in the cluster with the disk images it owns.

use crate::core::{
    application::{checkpoint, pve_api::PveApi},
    domain::{
        error::ProxmoxResult,
        model::{inventory::VmInventoryItem, storage::ContentType},
        service::{
            dedup::dedup_by_key,
            disk_join::attach_disks,
            storage_tagging::{Admission, StorageTagger},
        },
    },
};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

/// Lists all VMs of the cluster, each with its disks attached.
///
/// Disk images are collected from every image-capable storage of every node
/// the cluster lists; a node that cannot answer fails the whole listing. A shared pool is read only through the first node that
/// reports it; node-local pools are read on each node. The resulting catalog
/// is de-duplicated by volume id before it is joined to the VMs by VM id.
pub async fn list_vms<A>(api: &A, cancel: &CancellationToken) -> ProxmoxResult<Vec<VmInventoryItem>>
where
    A: PveApi + ?Sized,
{
    checkpoint(cancel)?;
    let nodes = api.nodes().await?;

    let mut vms = Vec::new();
    let mut disks = Vec::new();
    let mut tagger = StorageTagger::new();

    for node in &nodes {
        checkpoint(cancel)?;
        vms.extend(api.vms(&node.node).await?);

        checkpoint(cancel)?;
        let pools = api.storages(&node.node, Some(ContentType::Images)).await?;
        for pool in pools {
            if tagger.admit(&node.node, &pool) == Admission::Duplicate {
                debug!("shared storage {} already read, skipping on {}", pool.storage, node.node);
                continue;
            }
            checkpoint(cancel)?;
            disks.extend(
                api.storage_content(&node.node, &pool.storage, Some(ContentType::Images))
                    .await?,
            );
        }
    }

    let catalog = dedup_by_key(&disks, |disk| disk.volid.clone());
    info!(
        "found {} VMs and {} disk images ({} reported) on {} nodes",
        vms.len(),
        catalog.len(),
        disks.len(),
        nodes.len()
    );

    Ok(attach_disks(vms, &catalog))
}

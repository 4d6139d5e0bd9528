//! Node enumeration, optionally with network and service details.

use crate::core::{
    application::{checkpoint, pve_api::PveApi},
    domain::{error::ProxmoxResult, model::inventory::NodeInventoryItem},
};
use log::info;
use tokio_util::sync::CancellationToken;

/// How much to fetch about each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeDetails {
    /// Only the `/nodes` listing.
    Summary,
    /// The listing plus `/network` and `/services` of every node.
    #[default]
    Full,
}

/// Lists the nodes of the cluster.
///
/// With [`NodeDetails::Full`], every node is enriched with its network interfaces
/// and services, and a node that cannot answer fails the listing. Use
/// [`NodeDetails::Summary`] to list a cluster with unreachable members.
pub async fn list_nodes<A>(
    api: &A,
    details: NodeDetails,
    cancel: &CancellationToken,
) -> ProxmoxResult<Vec<NodeInventoryItem>>
where
    A: PveApi + ?Sized,
{
    checkpoint(cancel)?;
    let nodes = api.nodes().await?;

    let mut items = Vec::with_capacity(nodes.len());
    for node in nodes {
        let (network, services) = if details == NodeDetails::Full {
            checkpoint(cancel)?;
            let network = api.node_network(&node.node).await?;
            checkpoint(cancel)?;
            let services = api.node_services(&node.node).await?;
            (Some(network), Some(services))
        } else {
            (None, None)
        };
        items.push(NodeInventoryItem {
            node,
            network,
            services,
        });
    }

    info!("found {} nodes", items.len());
    Ok(items)
}

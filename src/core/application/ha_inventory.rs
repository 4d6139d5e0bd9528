//! HA group enumeration.

use crate::core::{
    application::{checkpoint, pve_api::PveApi},
    domain::{
        error::ProxmoxResult, model::inventory::HaGroupInventoryItem,
        service::ha_join::attach_resources,
    },
};
use log::info;
use tokio_util::sync::CancellationToken;

/// Lists the HA groups of the cluster with the resources bound to each.
pub async fn list_ha_groups<A>(
    api: &A,
    cancel: &CancellationToken,
) -> ProxmoxResult<Vec<HaGroupInventoryItem>>
where
    A: PveApi + ?Sized,
{
    checkpoint(cancel)?;
    let groups = api.ha_groups().await?;
    checkpoint(cancel)?;
    let resources = api.ha_resources().await?;

    info!(
        "found {} HA groups and {} HA resources",
        groups.len(),
        resources.len()
    );
    Ok(attach_resources(groups, &resources))
}

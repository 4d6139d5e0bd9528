//! Inventory use cases: the enumerators that walk the cluster and join what they find.

pub mod ha_inventory;
pub mod node_inventory;
pub mod pve_api;
pub mod storage_inventory;
pub mod vm_inventory;

use crate::core::domain::error::{ProxmoxError, ProxmoxResult};
use log::warn;
use tokio_util::sync::CancellationToken;

/// Fails with `ProxmoxError::Cancelled` once the token has been cancelled.
///
/// Enumerators call this before every remote call.
pub(crate) fn checkpoint(cancel: &CancellationToken) -> ProxmoxResult<()> {
    if cancel.is_cancelled() {
        warn!("inventory cancelled before completion");
        return Err(ProxmoxError::Cancelled);
    }
    Ok(())
}

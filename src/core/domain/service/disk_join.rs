//! Attaching disk volumes to the virtual machines that own them.

use crate::core::domain::model::{
    inventory::VmInventoryItem, storage::ContentEntry, vm::VmListItem,
};

/// Annotates every VM with the disks whose owner id equals the VM id.
///
/// Both ids are already numeric, so `"100"` and `100` on the wire match.
/// Disks without an owner are never attached. A VM without disks gets an
/// empty list. Disks keep the order they have in `disks`.
pub fn attach_disks(vms: Vec<VmListItem>, disks: &[ContentEntry]) -> Vec<VmInventoryItem> {
    vms.into_iter()
        .map(|vm| {
            let owned = disks
                .iter()
                .filter(|disk| disk.vmid == Some(vm.vmid))
                .cloned()
                .collect();
            VmInventoryItem { vm, disks: owned }
        })
        .collect()
}

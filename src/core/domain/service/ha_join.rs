//! Grouping HA resources under their HA group.

use crate::core::domain::model::{
    ha::{HaGroup, HaResource},
    inventory::HaGroupInventoryItem,
};

/// Annotates every group with the resources bound to it by name.
pub fn attach_resources(
    groups: Vec<HaGroup>,
    resources: &[HaResource],
) -> Vec<HaGroupInventoryItem> {
    groups
        .into_iter()
        .map(|group| {
            let bound = resources
                .iter()
                .filter(|r| r.group.as_deref() == Some(group.group.as_str()))
                .cloned()
                .collect();
            HaGroupInventoryItem {
                group,
                resources: bound,
            }
        })
        .collect()
}

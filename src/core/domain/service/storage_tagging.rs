//! Per-node tagging and cluster-wide de-duplication of storage pools.

use crate::core::domain::model::storage::StoragePool;
use std::collections::HashSet;

/// The decision for one pool reported by one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// A node-local pool, tagged with the node that reported it.
    Local { node: String },
    /// The first report of a shared pool.
    Shared,
    /// A shared pool already admitted through an earlier node.
    Duplicate,
}

/// Decides which storage pool reports make it into the inventory.
///
/// Non-shared pools are admitted once per node, since a pool named `local` on
/// two nodes is two different pools. Shared pools are admitted only the first
/// time their name is seen, which follows the order in which nodes are visited.
#[derive(Debug, Default)]
pub struct StorageTagger {
    seen_shared: HashSet<String>,
}

impl StorageTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, node: &str, pool: &StoragePool) -> Admission {
        if !pool.shared {
            Admission::Local {
                node: node.to_string(),
            }
        } else if self.seen_shared.insert(pool.storage.clone()) {
            Admission::Shared
        } else {
            Admission::Duplicate
        }
    }
}

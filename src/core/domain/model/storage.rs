//! Domain models for storage pools and their content.
//!
//! Pools come from `/nodes/{node}/storage`, content entries from
//! `/nodes/{node}/storage/{storage}/content`.

use crate::core::domain::value_object::serde_helpers::{int_bool, option_vmid};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Content types a storage pool can hold, used to filter listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// VM disk images.
    Images,
    /// Container root directories.
    Rootdir,
    /// ISO images.
    Iso,
    /// Container templates.
    Vztmpl,
    /// Backup archives.
    Backup,
    /// Snippets (hook scripts, cloud-init).
    Snippets,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Images => "images",
            ContentType::Rootdir => "rootdir",
            ContentType::Iso => "iso",
            ContentType::Vztmpl => "vztmpl",
            ContentType::Backup => "backup",
            ContentType::Snippets => "snippets",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage pool as seen from one node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoragePool {
    /// Storage identifier (e.g., "local", "nfs-images").
    pub storage: String,
    /// Storage plugin type (e.g., "dir", "nfs", "lvmthin", "rbd").
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Comma separated content types (e.g., "images,rootdir").
    #[serde(default)]
    pub content: String,
    /// Whether the pool is shared by all nodes.
    #[serde(default, with = "int_bool")]
    pub shared: bool,
    /// Whether the pool is currently active on the reporting node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<u8>,
    /// Whether the pool is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<u8>,
    /// Total capacity in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Used space in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    /// Available space in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avail: Option<u64>,
    /// Used space as a fraction of the total (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_fraction: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoragePool {
    /// Iterates over the content type tags of the pool.
    pub fn content_types(&self) -> impl Iterator<Item = &str> {
        self.content
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// An item stored within a storage pool (disk image, ISO, backup...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContentEntry {
    /// Volume identifier, `<storage>:<volume>` (e.g., "local-lvm:vm-100-disk-0").
    pub volid: String,
    /// Owning VM id, if the volume belongs to a guest.
    #[serde(default, with = "option_vmid", skip_serializing_if = "Option::is_none")]
    pub vmid: Option<u32>,
    /// Volume size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Volume format (e.g., "raw", "qcow2", "iso").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Content type of the volume (e.g., "images").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Space actually used in bytes (thin provisioning).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    /// Creation time (UNIX seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctime: Option<u64>,
    /// Notes attached to the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentEntry {
    /// The storage pool owning this volume, taken from the `volid` prefix.
    pub fn storage_id(&self) -> &str {
        self.volid
            .split_once(':')
            .map(|(storage, _)| storage)
            .unwrap_or(&self.volid)
    }
}

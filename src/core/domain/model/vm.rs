//! Domain models for QEMU virtual machine operations.
//!
//! This module defines the structures used when interacting with VMs via the Proxmox API.

use crate::core::domain::value_object::serde_helpers::vmid;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A virtual machine as returned by the `/nodes/{node}/qemu` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmListItem {
    /// The VM identifier (unique per cluster). Accepted as number or numeric string.
    #[serde(with = "vmid")]
    pub vmid: u32,
    /// Human-readable name (absent for VMs created without one).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current status (e.g., "running", "stopped").
    pub status: String,
    /// Number of virtual CPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpus: Option<u32>,
    /// CPU usage fraction (0.0 to 1.0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// Memory usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem: Option<u64>,
    /// Maximum memory in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxmem: Option<u64>,
    /// Disk usage in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    /// Maximum disk space in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxdisk: Option<u64>,
    /// Uptime in seconds (if running).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Additional tags (if any), separated by `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for creating a new VM via `POST /nodes/{node}/qemu`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateVmParams {
    /// VM identifier (required, must be unique in the cluster).
    pub vmid: u32,
    /// VM name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Memory in MB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u32>,
    /// Number of CPU sockets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sockets: Option<u32>,
    /// Number of cores per socket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    /// CPU type (e.g., "host", "kvm64").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    /// OS type (e.g., "l26", "win10").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ostype: Option<String>,
    /// First network device (e.g., "virtio,bridge=vmbr0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net0: Option<String>,
    /// First SCSI disk (e.g., "local-lvm:32").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scsi0: Option<String>,
    /// SCSI controller type (e.g., "virtio-scsi-pci").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scsihw: Option<String>,
    /// CD-ROM image (e.g., "local:iso/debian.iso,media=cdrom").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ide2: Option<String>,
    /// Boot order (e.g., "order=scsi0;net0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot: Option<String>,
    /// Start after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u8>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

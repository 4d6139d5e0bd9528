//! Text and JSON rendering of inventory listings.

use crate::{HaGroupInventoryItem, NodeInventoryItem, StorageInventoryItem, VmInventoryItem};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

const UNKNOWN: &str = "-";

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| v.to_string())
}

fn percent(fraction: Option<f64>) -> String {
    fraction.map_or_else(|| UNKNOWN.to_string(), |f| format!("{:.1}%", f * 100.0))
}

/// Serializes a whole listing as a single line of JSON.
pub fn raw<T: Serialize + ?Sized>(items: &T) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

pub fn vms<W: Write>(out: &mut W, items: &[VmInventoryItem]) -> io::Result<()> {
    for item in items {
        let vm = &item.vm;
        writeln!(out, "{}:", vm.vmid)?;
        writeln!(out, "    name: {}", vm.name.as_deref().unwrap_or(""))?;
        writeln!(out, "    status: {}", vm.status)?;
        writeln!(out, "    cpu: {}", or_unknown(vm.cpus))?;
        writeln!(out, "    memory: {}", or_unknown(vm.maxmem))?;
        writeln!(out, "    disks:")?;
        for disk in &item.disks {
            writeln!(out, "        {}:", disk.volid)?;
            writeln!(out, "            size: {}", or_unknown(disk.size))?;
        }
    }
    Ok(())
}

pub fn nodes<W: Write>(out: &mut W, items: &[NodeInventoryItem]) -> io::Result<()> {
    for item in items {
        let node = &item.node;
        writeln!(out, "{}:", node.node)?;
        writeln!(out, "    status: {}", node.status)?;
        writeln!(out, "    cpu: {}", percent(node.cpu))?;
        writeln!(out, "    memory: {}", percent(node.memory_fraction()))?;
    }
    Ok(())
}

pub fn storage<W: Write>(out: &mut W, items: &[StorageInventoryItem]) -> io::Result<()> {
    for item in items {
        let pool = &item.pool;
        writeln!(out, "{}:", pool.storage)?;
        writeln!(out, "    type: {}", pool.storage_type)?;
        writeln!(out, "    content: {}", pool.content)?;
        writeln!(out, "    shared: {}", u8::from(pool.shared))?;
        writeln!(out, "    size: {}", or_unknown(pool.total))?;
        writeln!(out, "    used: {}", percent(pool.used_fraction))?;
    }
    Ok(())
}

pub fn ha_groups<W: Write>(out: &mut W, items: &[HaGroupInventoryItem]) -> io::Result<()> {
    for item in items {
        let group = &item.group;
        writeln!(out, "{}:", group.group)?;
        writeln!(out, "    nodes: {}", group.nodes.as_deref().unwrap_or(""))?;
        writeln!(out, "    restricted: {}", group.restricted.unwrap_or(0))?;
        writeln!(out, "    resources:")?;
        for resource in &item.resources {
            writeln!(
                out,
                "        {}: {}",
                resource.sid,
                resource.state.as_deref().unwrap_or(UNKNOWN)
            )?;
        }
    }
    Ok(())
}

//! Command-line front end shared by the `pve-inventory` and `list-pve-vms` binaries.

pub mod args;
pub mod output;
pub mod prompt;
pub mod signal;

pub use args::{ConnectionArgs, InventoryArgs, VmListArgs};

use crate::{
    NodeDetails, ProxmoxError, PveApi, list_ha_groups, list_nodes, list_storage, list_vms,
};
use anyhow::Context;
use std::io::Write;
use tokio_util::sync::CancellationToken;

/// The listings selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub vms: bool,
    pub nodes: bool,
    pub storage: bool,
    pub ha_groups: bool,
    pub node_details: bool,
    pub raw: bool,
}

/// Runs the selected enumerations in order (VMs, nodes, storage, HA groups) and
/// writes each listing to `out` as soon as it is complete.
pub async fn run_report<A, W>(
    api: &A,
    report: Report,
    out: &mut W,
    cancel: &CancellationToken,
) -> anyhow::Result<()>
where
    A: PveApi + ?Sized,
    W: Write,
{
    if report.vms {
        let vms = list_vms(api, cancel).await.context("listing VMs")?;
        write_listing(out, report.raw, &vms, output::vms)?;
    }
    if report.nodes {
        let details = if report.node_details {
            NodeDetails::Full
        } else {
            NodeDetails::Summary
        };
        let nodes = list_nodes(api, details, cancel)
            .await
            .context("listing nodes")?;
        write_listing(out, report.raw, &nodes, output::nodes)?;
    }
    if report.storage {
        let storage = list_storage(api, cancel).await.context("listing storage")?;
        write_listing(out, report.raw, &storage, output::storage)?;
    }
    if report.ha_groups {
        let groups = list_ha_groups(api, cancel)
            .await
            .context("listing HA groups")?;
        write_listing(out, report.raw, &groups, output::ha_groups)?;
    }
    out.flush()?;
    Ok(())
}

fn write_listing<W, T>(
    out: &mut W,
    raw: bool,
    items: &[T],
    text: fn(&mut W, &[T]) -> std::io::Result<()>,
) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    if raw {
        writeln!(out, "{}", output::raw(items)?)?;
    } else {
        text(out, items)?;
    }
    Ok(())
}

/// True when `err` only reports that the user interrupted the run.
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ProxmoxError>()
        .is_some_and(ProxmoxError::is_cancelled)
}

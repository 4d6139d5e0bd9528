//! Two-node cluster served over HTTP, walked by the enumerators end to end.

use crate::cli::{Report, run_report};
use crate::tests::support::create_authenticated_client;
use crate::{ProxmoxClient, list_storage, list_vms};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_get(mock_server: &MockServer, api_path: &str, data: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api2/json/{}", api_path)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": data })))
        .mount(mock_server)
        .await;
}

/// Node `pve-a` runs VM 100 with a disk on its local pool; node `pve-b` runs VM 200
/// with a disk on the shared `nfs` pool, which both nodes report.
async fn two_node_cluster(mock_server: &MockServer) -> ProxmoxClient {
    let client = create_authenticated_client(mock_server).await;

    mount_get(
        mock_server,
        "nodes",
        serde_json::json!([
            { "node": "pve-a", "status": "online", "cpu": 0.1, "mem": 1, "maxmem": 4 },
            { "node": "pve-b", "status": "online", "cpu": 0.2, "mem": 2, "maxmem": 4 }
        ]),
    )
    .await;

    mount_get(
        mock_server,
        "nodes/pve-a/qemu",
        serde_json::json!([{ "vmid": 100, "name": "alpha", "status": "running", "cpus": 2, "maxmem": 2048 }]),
    )
    .await;
    mount_get(
        mock_server,
        "nodes/pve-b/qemu",
        serde_json::json!([{ "vmid": "200", "name": "beta", "status": "stopped", "cpus": 1, "maxmem": 1024 }]),
    )
    .await;

    mount_get(
        mock_server,
        "nodes/pve-a/storage",
        serde_json::json!([
            { "storage": "local", "type": "dir", "content": "images,iso", "shared": 0, "total": 1000, "used_fraction": 0.5 },
            { "storage": "nfs", "type": "nfs", "content": "images", "shared": 1, "total": 5000, "used_fraction": 0.1 }
        ]),
    )
    .await;
    mount_get(
        mock_server,
        "nodes/pve-b/storage",
        serde_json::json!([
            { "storage": "nfs", "type": "nfs", "content": "images", "shared": 1, "total": 5000, "used_fraction": 0.1 }
        ]),
    )
    .await;

    mount_get(
        mock_server,
        "nodes/pve-a/storage/local/content",
        serde_json::json!([
            { "volid": "local:100/vm-100-disk-0.qcow2", "vmid": "100", "size": 4096, "content": "images" }
        ]),
    )
    .await;
    mount_get(
        mock_server,
        "nodes/pve-a/storage/nfs/content",
        serde_json::json!([
            { "volid": "nfs:200/vm-200-disk-0.raw", "vmid": 200, "size": 8192, "content": "images" }
        ]),
    )
    .await;

    // The shared pool is read through pve-a only.
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve-b/storage/nfs/content"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(mock_server)
        .await;

    client
}

#[tokio::test]
async fn test_vms_get_exactly_their_disks() {
    let mock_server = MockServer::start().await;
    let client = two_node_cluster(&mock_server).await;

    let vms = list_vms(&client, &CancellationToken::new()).await.unwrap();

    assert_eq!(vms.len(), 2);
    assert_eq!(vms[0].vm.vmid, 100);
    assert_eq!(vms[0].disks.len(), 1);
    assert_eq!(vms[0].disks[0].volid, "local:100/vm-100-disk-0.qcow2");
    assert_eq!(vms[1].vm.vmid, 200);
    assert_eq!(vms[1].disks.len(), 1);
    assert_eq!(vms[1].disks[0].volid, "nfs:200/vm-200-disk-0.raw");
}

#[tokio::test]
async fn test_storage_lists_shared_pool_once() {
    let mock_server = MockServer::start().await;
    let client = two_node_cluster(&mock_server).await;

    let storage = list_storage(&client, &CancellationToken::new()).await.unwrap();

    assert_eq!(storage.len(), 2);
    assert_eq!(storage[0].pool.storage, "local");
    assert_eq!(storage[0].node.as_deref(), Some("pve-a"));
    assert_eq!(storage[1].pool.storage, "nfs");
    assert_eq!(storage[1].node, None);
}

#[tokio::test]
async fn test_text_report() {
    let mock_server = MockServer::start().await;
    let client = two_node_cluster(&mock_server).await;

    let report = Report {
        vms: true,
        nodes: true,
        ..Report::default()
    };
    let mut out = Vec::new();
    run_report(&client, report, &mut out, &CancellationToken::new())
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("100:\n    name: alpha\n"));
    assert!(text.contains("200:\n    name: beta\n    status: stopped\n    cpu: 1\n    memory: 1024\n    disks:\n        nfs:200/vm-200-disk-0.raw:\n            size: 8192\n"));
    assert!(text.contains("pve-b:\n    status: online\n    cpu: 20.0%\n    memory: 50.0%\n"));
}

#[tokio::test]
async fn test_raw_report_is_a_single_json_line() {
    let mock_server = MockServer::start().await;
    let client = two_node_cluster(&mock_server).await;

    let report = Report {
        vms: true,
        raw: true,
        ..Report::default()
    };
    let mut out = Vec::new();
    run_report(&client, report, &mut out, &CancellationToken::new())
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed[1]["vmid"], 200);
    assert_eq!(parsed[1]["name"], "beta");
    assert_eq!(parsed[1]["disks"][0]["vmid"], 200);
}

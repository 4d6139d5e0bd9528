use crate::tests::support::create_authenticated_client;
use crate::{ContentType, list_storage};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn test_storages_filtered_by_content() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage"))
        .and(query_param("content", "images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "storage": "local-lvm",
                    "type": "lvmthin",
                    "content": "images,rootdir",
                    "shared": 0,
                    "active": 1,
                    "enabled": 1,
                    "total": 100000,
                    "used": 25000,
                    "avail": 75000,
                    "used_fraction": 0.25
                },
                {
                    "storage": "ceph",
                    "type": "rbd",
                    "content": "images",
                    "shared": 1
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pools = client
        .storages("pve1", Some(ContentType::Images))
        .await
        .unwrap();

    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].storage_type, "lvmthin");
    assert!(!pools[0].shared);
    assert_eq!(pools[0].used_fraction, Some(0.25));
    assert_eq!(pools[0].content_types().collect::<Vec<_>>(), vec!["images", "rootdir"]);
    assert!(pools[1].shared);
    assert_eq!(pools[1].total, None);
}

#[tokio::test]
async fn test_storage_content_listing() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/local/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "volid": "local:iso/debian-12.iso",
                    "content": "iso",
                    "format": "iso",
                    "size": 658505728,
                    "ctime": 1700000000
                },
                {
                    "volid": "local:100/vm-100-disk-0.qcow2",
                    "content": "images",
                    "format": "qcow2",
                    "size": 34359738368_i64,
                    "used": 1048576,
                    "vmid": "100"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let entries = client.storage_content("pve1", "local", None).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].vmid, None);
    assert_eq!(entries[0].storage_id(), "local");
    assert_eq!(entries[1].vmid, Some(100));
    assert_eq!(entries[1].size, Some(34359738368));
}

#[tokio::test]
async fn test_vm_disks_query() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/local-lvm/content"))
        .and(query_param("content", "images"))
        .and(query_param("vmid", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "volid": "local-lvm:vm-100-disk-0", "vmid": 100, "size": 1024 }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let disks = client.vm_disks("pve1", "local-lvm", 100).await.unwrap();
    assert_eq!(disks.len(), 1);
    assert_eq!(disks[0].volid, "local-lvm:vm-100-disk-0");
}

#[tokio::test]
async fn test_storage_enumeration_over_http() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "node": "pve1", "status": "online" },
                { "node": "pve2", "status": "online" },
                { "node": "pve3", "status": "online" }
            ]
        })))
        .mount(&mock_server)
        .await;

    for node in ["pve1", "pve2", "pve3"] {
        Mock::given(method("GET"))
            .and(path(format!("/api2/json/nodes/{}/storage", node)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "storage": "nfs", "type": "nfs", "content": "images,backup", "shared": 1 }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/storage/nfs/content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "volid": "nfs:backup/vzdump-qemu-100.vma.zst", "content": "backup", "vmid": 100 }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let storage = list_storage(&client, &CancellationToken::new()).await.unwrap();

    assert_eq!(storage.len(), 1);
    assert_eq!(storage[0].pool.storage, "nfs");
    assert_eq!(storage[0].node, None);
    assert_eq!(storage[0].contents.len(), 1);
}

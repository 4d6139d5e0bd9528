use crate::tests::support::create_authenticated_client;
use crate::{NodeDetails, ProxmoxError, list_nodes};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_nodes(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "node": "pve1",
                    "status": "online",
                    "cpu": 0.15,
                    "maxcpu": 8,
                    "mem": 8589934592_i64,
                    "maxmem": 17179869184_i64,
                    "disk": 1099511627776_i64,
                    "maxdisk": 2199023255552_i64,
                    "uptime": 1234567,
                    "id": "node/pve1",
                    "ssl_fingerprint": "AA:BB:CC:DD:EE:FF",
                    "level": ""
                },
                {
                    "node": "pve2",
                    "status": "offline",
                    "id": "node/pve2"
                }
            ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_nodes_list_success() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;
    mount_nodes(&mock_server).await;

    let nodes = client.nodes().await.unwrap();
    assert_eq!(nodes.len(), 2);

    let node1 = &nodes[0];
    assert_eq!(node1.node, "pve1");
    assert_eq!(node1.status, "online");
    assert_eq!(node1.cpu, Some(0.15));
    assert_eq!(node1.maxcpu, Some(8));
    assert_eq!(node1.mem, Some(8589934592));
    assert_eq!(node1.maxmem, Some(17179869184));
    assert_eq!(node1.uptime, Some(1234567));
    assert_eq!(node1.ssl_fingerprint.as_deref(), Some("AA:BB:CC:DD:EE:FF"));
    assert_eq!(node1.extra["level"], "");

    let node2 = &nodes[1];
    assert_eq!(node2.status, "offline");
    assert_eq!(node2.cpu, None);
    assert_eq!(node2.memory_fraction(), None);
}

#[tokio::test]
async fn test_nodes_list_empty() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
        )
        .mount(&mock_server)
        .await;

    let nodes = client.nodes().await.unwrap();
    assert!(nodes.is_empty());
}

#[tokio::test]
async fn test_node_without_name_is_a_parse_error() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{ "status": "online" }]
        })))
        .mount(&mock_server)
        .await;

    let result = client.nodes().await;
    assert!(matches!(result, Err(ProxmoxError::Connection(_))));
}

#[tokio::test]
async fn test_node_details_are_fetched_for_every_node() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;
    mount_nodes(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "iface": "vmbr0",
                    "type": "bridge",
                    "active": 1,
                    "autostart": 1,
                    "cidr": "192.168.1.10/24",
                    "gateway": "192.168.1.1",
                    "bridge_ports": "eno1",
                    "families": ["inet"]
                },
                { "iface": "eno1", "type": "eth", "active": 1 }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "service": "pveproxy", "name": "pveproxy", "desc": "PVE API Proxy Server", "state": "running" },
                { "service": "corosync", "name": "corosync", "state": "running" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve2/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve2/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let items = list_nodes(&client, NodeDetails::Full, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    let network = items[0].network.as_ref().unwrap();
    assert_eq!(network[0].iface, "vmbr0");
    assert_eq!(network[0].iface_type, "bridge");
    assert!(network[0].autostart);
    assert_eq!(network[0].bridge_ports.as_deref(), Some("eno1"));
    assert!(!network[1].autostart);
    assert_eq!(items[0].services.as_ref().unwrap().len(), 2);
    assert!(items[1].network.as_ref().is_some_and(|n| n.is_empty()));
}

#[tokio::test]
async fn test_unreachable_node_fails_detailed_listing() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;
    mount_nodes(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve2/network"))
        .respond_with(ResponseTemplate::new(595).set_body_string("No route to host"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = list_nodes(&client, NodeDetails::Full, &CancellationToken::new()).await;
    assert!(matches!(result, Err(ProxmoxError::Connection(msg)) if msg.contains("595")));

    let items = list_nodes(&client, NodeDetails::Summary, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

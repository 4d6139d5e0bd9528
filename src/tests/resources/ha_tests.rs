use crate::tests::support::create_authenticated_client;
use crate::list_ha_groups;
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mount_ha(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/ha/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "group": "prod", "nodes": "pve1:2,pve2:1", "restricted": 1, "nofailback": 0, "type": "group" },
                { "group": "lab", "nodes": "pve3" }
            ]
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/ha/resources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                { "sid": "vm:100", "group": "prod", "state": "started", "max_restart": 1, "type": "vm" },
                { "sid": "vm:101", "group": "prod", "state": "stopped" },
                { "sid": "ct:200", "state": "started" }
            ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_ha_groups_and_resources() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;
    mount_ha(&mock_server).await;

    let groups = client.ha_groups().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].restricted, Some(1));
    assert_eq!(groups[1].restricted, None);

    let resources = client.ha_resources().await.unwrap();
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[0].max_restart, Some(1));
    assert_eq!(resources[2].group, None);
}

#[tokio::test]
async fn test_ha_enumeration_joins_resources_by_group() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server).await;
    mount_ha(&mock_server).await;

    let items = list_ha_groups(&client, &CancellationToken::new())
        .await
        .unwrap();

    let sids: Vec<_> = items[0].resources.iter().map(|r| r.sid.as_str()).collect();
    assert_eq!(sids, vec!["vm:100", "vm:101"]);
    assert!(items[1].resources.is_empty());
}

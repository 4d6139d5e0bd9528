//! Shared fixtures for unit and mock-server tests.

use crate::{
    ContentEntry, NodeListItem, ProxmoxAuth, ProxmoxClient, ProxmoxConnection, StoragePool,
    ValidationConfig, VmListItem,
    core::{
        domain::value_object::{
            ProxmoxCSRFToken, ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm,
            ProxmoxTicket, ProxmoxUrl, ProxmoxUsername,
        },
        infrastructure::api_client::ApiClient,
    },
};
use serde_json::json;
use wiremock::MockServer;

pub(crate) const TEST_TICKET: &str = "PVE:testuser@pam:4EEC61E2::sig";
pub(crate) const TEST_CSRF: &str = "4EEC61E2:token";

pub(crate) fn create_test_connection(server_url: &str) -> ProxmoxConnection {
    let host = ProxmoxHost::new_unchecked(server_url.trim_start_matches("http://").to_string());
    let port = ProxmoxPort::new_unchecked(8006);
    let username = ProxmoxUsername::new_unchecked("testuser".to_string());
    let password = ProxmoxPassword::new_unchecked("testpass".to_string());
    let realm = ProxmoxRealm::new_unchecked("pam".to_string());
    let url = ProxmoxUrl::new_unchecked(server_url.to_string() + "/");
    ProxmoxConnection::new(host, port, username, password, realm, false, true, url)
}

pub(crate) fn create_test_auth() -> ProxmoxAuth {
    ProxmoxAuth::new(
        ProxmoxTicket::new_unchecked(TEST_TICKET.to_string()),
        Some(ProxmoxCSRFToken::new_unchecked(TEST_CSRF.to_string())),
    )
}

/// A client pointed at `mock_server` that already holds a valid ticket.
pub(crate) async fn create_authenticated_client(mock_server: &MockServer) -> ProxmoxClient {
    let connection = create_test_connection(&mock_server.uri());
    let api_client = ApiClient::new(connection, ValidationConfig::default()).unwrap();
    api_client.set_auth(create_test_auth()).await;

    ProxmoxClient {
        api_client,
        config: ValidationConfig::default(),
    }
}

pub(crate) fn node(name: &str, status: &str) -> NodeListItem {
    serde_json::from_value(json!({"node": name, "status": status})).unwrap()
}

pub(crate) fn vm(vmid: u32) -> VmListItem {
    serde_json::from_value(json!({"vmid": vmid, "status": "running"})).unwrap()
}

pub(crate) fn pool(name: &str, shared: bool) -> StoragePool {
    serde_json::from_value(json!({
        "storage": name,
        "type": "dir",
        "content": "images",
        "shared": u8::from(shared)
    }))
    .unwrap()
}

pub(crate) fn content(volid: &str, vmid: Option<u32>) -> ContentEntry {
    let mut entry = json!({"volid": volid, "content": "images", "format": "raw"});
    if let Some(vmid) = vmid {
        entry["vmid"] = json!(vmid);
    }
    serde_json::from_value(entry).unwrap()
}

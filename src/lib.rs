mod auth;
pub mod cli;
pub mod config;
mod core;

#[cfg(test)]
mod tests;

pub use crate::config::{RateLimitConfig, ValidationConfig};
pub use crate::core::application::{
    ha_inventory::list_ha_groups,
    node_inventory::{NodeDetails, list_nodes},
    pve_api::PveApi,
    storage_inventory::list_storage,
    vm_inventory::list_vms,
};
pub use crate::core::domain::error::{ProxmoxError, ProxmoxResult, ValidationError};
pub use crate::core::domain::model::{
    ha::{HaGroup, HaResource},
    inventory::{HaGroupInventoryItem, NodeInventoryItem, StorageInventoryItem, VmInventoryItem},
    node_list_item::NodeListItem,
    node_network::NetworkInterface,
    node_service::NodeService,
    proxmox_auth::ProxmoxAuth,
    proxmox_connection::ProxmoxConnection,
    storage::{ContentEntry, ContentType, StoragePool},
    vm::{CreateVmParams, VmListItem},
};
pub use crate::core::domain::value_object::{
    DEFAULT_PORT, DEFAULT_REALM, ProxmoxCSRFToken, ProxmoxHost, ProxmoxPassword, ProxmoxPort,
    ProxmoxRealm, ProxmoxTicket, ProxmoxUrl, ProxmoxUsername,
};

use crate::core::{
    domain::value_object::{
        split_realm, validate_host, validate_password, validate_port, validate_realm,
        validate_username,
    },
    infrastructure::api_client::ApiClient,
};
use async_trait::async_trait;
use log::info;

/// A client for the Proxmox VE API.
///
/// Provides:
/// - Ticket authentication with transparent refresh
/// - Read access to nodes, VMs, storage and HA resources
/// - VM creation
///
/// # Examples
///
/// ```no_run
/// use pve_inventory::{ProxmoxClient, ProxmoxResult};
///
/// #[tokio::main]
/// async fn main() -> ProxmoxResult<()> {
///     let client = ProxmoxClient::builder()
///         .host("pve.example.com")
///         .port(8006)
///         .credentials("inventory@pve", "password", "pam")
///         .accept_invalid_certs(true)
///         .build()
///         .await?;
///
///     client.login().await?;
///     for node in client.nodes().await? {
///         println!("{} is {}", node.node, node.status);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ProxmoxClient {
    pub(crate) api_client: ApiClient,
    pub(crate) config: ValidationConfig,
}

/// Builder for ProxmoxClient configuration
#[derive(Debug, Default)]
pub struct ProxmoxClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
    realm: Option<String>,
    secure: Option<bool>,
    accept_invalid_certs: bool,
    config: Option<ValidationConfig>,
}

fn required(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or_else(|| ValidationError::Field {
        field: field.to_string(),
        message: format!("{} is required", field),
    })
}

impl ProxmoxClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the login. A `user@realm` username overrides `realm`.
    pub fn credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        realm: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self.realm = Some(realm.into());
        self
    }

    /// Use https (the default) or plain http.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Accept self-signed or otherwise unverifiable certificates.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn config(mut self, config: ValidationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validates every setting and creates the (not yet logged in) client.
    ///
    /// # Errors
    /// `ProxmoxError::Validation` naming the first invalid or missing setting, or
    /// `ProxmoxError::Connection` if the HTTP client cannot be created.
    pub async fn build(self) -> ProxmoxResult<ProxmoxClient> {
        let config = self.config.unwrap_or_default();

        let host = required("host", self.host)?;
        validate_host(&host)?;

        let port = self.port.unwrap_or(DEFAULT_PORT);
        validate_port(port)?;

        let login = required("username", self.username)?;
        let (username, login_realm) = split_realm(&login);
        validate_username(username, config.block_reserved_usernames)?;

        let password = required("password", self.password)?;
        validate_password(&password, config.password_min_score)?;

        let realm = match login_realm {
            Some(realm) => realm.to_string(),
            None => self.realm.unwrap_or_else(|| DEFAULT_REALM.to_string()),
        };
        validate_realm(&realm)?;

        let host = ProxmoxHost::new_unchecked(host);
        let port = ProxmoxPort::new_unchecked(port);
        let secure = self.secure.unwrap_or(true);
        let url = ProxmoxUrl::from_parts(&host, &port, secure)?;

        let connection = ProxmoxConnection::new(
            host,
            port,
            ProxmoxUsername::new_unchecked(username.to_string()),
            ProxmoxPassword::new_unchecked(password),
            ProxmoxRealm::new_unchecked(realm),
            secure,
            self.accept_invalid_certs,
            url,
        );

        let api_client = ApiClient::new(connection, config.clone())?;
        Ok(ProxmoxClient { api_client, config })
    }
}

impl ProxmoxClient {
    /// Creates a new builder for ProxmoxClient configuration
    pub fn builder() -> ProxmoxClientBuilder {
        ProxmoxClientBuilder::default()
    }

    /// Authenticates with the Proxmox server and stores the ticket and CSRF token.
    ///
    /// Calling this is optional: the first request logs in on demand.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The credentials are invalid
    /// - The server is unreachable
    /// - The response format is invalid
    pub async fn login(&self) -> ProxmoxResult<()> {
        self.api_client.login().await?;
        info!("logged in as {}", self.api_client.connection().login_name());
        Ok(())
    }

    /// Returns true if the client holds a ticket that has not expired
    pub async fn is_authenticated(&self) -> bool {
        self.api_client.is_authenticated().await
    }

    /// Returns the current ticket if authenticated
    pub async fn auth_token(&self) -> Option<ProxmoxTicket> {
        self.api_client.auth().await.map(|auth| auth.ticket().clone())
    }

    /// Returns the current CSRF token if authenticated
    pub async fn csrf_token(&self) -> Option<ProxmoxCSRFToken> {
        self.api_client
            .auth()
            .await
            .and_then(|auth| auth.csrf_token().cloned())
    }

    pub fn connection(&self) -> &ProxmoxConnection {
        self.api_client.connection()
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Lists the nodes of the cluster.
    pub async fn nodes(&self) -> ProxmoxResult<Vec<NodeListItem>> {
        self.api_client.get("nodes", &[]).await
    }

    /// Lists the network interfaces configured on a node.
    pub async fn node_network(&self, node: &str) -> ProxmoxResult<Vec<NetworkInterface>> {
        self.api_client
            .get(&format!("nodes/{}/network", node), &[])
            .await
    }

    /// Lists the system services of a node.
    pub async fn node_services(&self, node: &str) -> ProxmoxResult<Vec<NodeService>> {
        self.api_client
            .get(&format!("nodes/{}/services", node), &[])
            .await
    }

    /// Lists the QEMU virtual machines of a node.
    pub async fn vms(&self, node: &str) -> ProxmoxResult<Vec<VmListItem>> {
        self.api_client
            .get(&format!("nodes/{}/qemu", node), &[])
            .await
    }

    /// Lists the storage pools available on a node, optionally only those that
    /// can hold `content`.
    pub async fn storages(
        &self,
        node: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<StoragePool>> {
        let query: Vec<(&str, String)> = content
            .map(|c| ("content", c.to_string()))
            .into_iter()
            .collect();
        self.api_client
            .get(&format!("nodes/{}/storage", node), &query)
            .await
    }

    /// Lists the volumes of a storage pool as seen from a node.
    pub async fn storage_content(
        &self,
        node: &str,
        storage: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<ContentEntry>> {
        let query: Vec<(&str, String)> = content
            .map(|c| ("content", c.to_string()))
            .into_iter()
            .collect();
        self.api_client
            .get(&format!("nodes/{}/storage/{}/content", node, storage), &query)
            .await
    }

    /// Lists the disk images a single VM owns on a storage pool.
    ///
    /// This costs one request per VM and pool, so [`list_vms`] does not use it: it
    /// reads each pool's image listing once and joins the disks to VMs locally.
    /// Kept for callers that only need the disks of one known VM.
    pub async fn vm_disks(
        &self,
        node: &str,
        storage: &str,
        vmid: u32,
    ) -> ProxmoxResult<Vec<ContentEntry>> {
        let query = [
            ("content", ContentType::Images.to_string()),
            ("vmid", vmid.to_string()),
        ];
        self.api_client
            .get(&format!("nodes/{}/storage/{}/content", node, storage), &query)
            .await
    }

    /// Lists the HA groups of the cluster.
    pub async fn ha_groups(&self) -> ProxmoxResult<Vec<HaGroup>> {
        self.api_client.get("cluster/ha/groups", &[]).await
    }

    /// Lists the HA-managed resources of the cluster.
    pub async fn ha_resources(&self) -> ProxmoxResult<Vec<HaResource>> {
        self.api_client.get("cluster/ha/resources", &[]).await
    }

    /// Creates a QEMU virtual machine on `node`.
    ///
    /// # Returns
    ///
    /// The UPID of the creation task.
    pub async fn create_vm(&self, node: &str, params: &CreateVmParams) -> ProxmoxResult<String> {
        info!("creating VM {} on {}", params.vmid, node);
        self.api_client
            .post(&format!("nodes/{}/qemu", node), params)
            .await
    }
}

#[async_trait]
impl PveApi for ProxmoxClient {
    async fn nodes(&self) -> ProxmoxResult<Vec<NodeListItem>> {
        ProxmoxClient::nodes(self).await
    }

    async fn node_network(&self, node: &str) -> ProxmoxResult<Vec<NetworkInterface>> {
        ProxmoxClient::node_network(self, node).await
    }

    async fn node_services(&self, node: &str) -> ProxmoxResult<Vec<NodeService>> {
        ProxmoxClient::node_services(self, node).await
    }

    async fn vms(&self, node: &str) -> ProxmoxResult<Vec<VmListItem>> {
        ProxmoxClient::vms(self, node).await
    }

    async fn storages(
        &self,
        node: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<StoragePool>> {
        ProxmoxClient::storages(self, node, content).await
    }

    async fn storage_content(
        &self,
        node: &str,
        storage: &str,
        content: Option<ContentType>,
    ) -> ProxmoxResult<Vec<ContentEntry>> {
        ProxmoxClient::storage_content(self, node, storage, content).await
    }

    async fn ha_groups(&self) -> ProxmoxResult<Vec<HaGroup>> {
        ProxmoxClient::ha_groups(self).await
    }

    async fn ha_resources(&self) -> ProxmoxResult<Vec<HaResource>> {
        ProxmoxClient::ha_resources(self).await
    }
}

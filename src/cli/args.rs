use crate::{
    DEFAULT_PORT, DEFAULT_REALM, ProxmoxClient, ProxmoxResult, RateLimitConfig, ValidationConfig,
    cli::Report,
};
use clap::{Args, Parser};

/// Where and how to log into the cluster.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Proxmox host to connect to
    #[arg(short = 'H', long, env = "PVE_HOST")]
    pub host: String,

    /// API port
    #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Username to authenticate as; `user@realm` selects the realm too
    #[arg(short, long, env = "PVE_USERNAME")]
    pub username: String,

    /// Password, leave blank to be prompted for it
    #[arg(short, long, env = "PVE_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Authentication realm used when the username carries none
    #[arg(long, default_value = DEFAULT_REALM)]
    pub realm: String,

    /// Verify the server's TLS certificate (self-signed certificates are accepted otherwise)
    #[arg(long, action)]
    pub verify_tls: bool,

    /// Maximum number of API requests per second
    #[arg(long, value_name = "N")]
    pub rate_limit: Option<u32>,
}

impl ConnectionArgs {
    /// Builds a client from these settings and the resolved password.
    pub async fn client(&self, password: String) -> ProxmoxResult<ProxmoxClient> {
        let config = ValidationConfig {
            rate_limit: self.rate_limit.map(RateLimitConfig::per_second),
            ..ValidationConfig::default()
        };

        ProxmoxClient::builder()
            .host(self.host.as_str())
            .port(self.port)
            .credentials(self.username.as_str(), password, self.realm.as_str())
            .accept_invalid_certs(!self.verify_tls)
            .config(config)
            .build()
            .await
    }
}

/// Proxmox VE cluster inventory
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct InventoryArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Show raw output as JSON instead of formatted output
    #[arg(short = 'r', long, action)]
    pub show_raw: bool,

    /// List all virtual machines and their disks
    #[arg(short = 'v', long, action)]
    pub list_vms: bool,

    /// List all nodes
    #[arg(short = 'n', long, action)]
    pub list_nodes: bool,

    /// List all storage
    #[arg(short = 's', long, action)]
    pub list_storage: bool,

    /// List all HA groups and their resources
    #[arg(short = 'g', long, action)]
    pub list_ha_groups: bool,

    /// Do not fetch network and service details for each node
    #[arg(long, action)]
    pub skip_node_details: bool,
}

impl InventoryArgs {
    pub fn report(&self) -> Report {
        Report {
            vms: self.list_vms,
            nodes: self.list_nodes,
            storage: self.list_storage,
            ha_groups: self.list_ha_groups,
            node_details: !self.skip_node_details,
            raw: self.show_raw,
        }
    }
}

/// List VMs running on a Proxmox VE cluster
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct VmListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

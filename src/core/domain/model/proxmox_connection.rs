use crate::core::domain::value_object::{
    ProxmoxHost, ProxmoxPassword, ProxmoxPort, ProxmoxRealm, ProxmoxUrl, ProxmoxUsername,
};

/// Everything needed to reach and log into one Proxmox VE API endpoint.
#[derive(Debug, Clone)]
pub struct ProxmoxConnection {
    host: ProxmoxHost,
    port: ProxmoxPort,
    username: ProxmoxUsername,
    password: ProxmoxPassword,
    realm: ProxmoxRealm,
    secure: bool,
    accept_invalid_certs: bool,
    url: ProxmoxUrl,
}

impl ProxmoxConnection {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: ProxmoxHost,
        port: ProxmoxPort,
        username: ProxmoxUsername,
        password: ProxmoxPassword,
        realm: ProxmoxRealm,
        secure: bool,
        accept_invalid_certs: bool,
        url: ProxmoxUrl,
    ) -> Self {
        Self {
            host,
            port,
            username,
            password,
            realm,
            secure,
            accept_invalid_certs,
            url,
        }
    }

    pub fn host(&self) -> &ProxmoxHost {
        &self.host
    }

    pub fn port(&self) -> &ProxmoxPort {
        &self.port
    }

    pub fn username(&self) -> &ProxmoxUsername {
        &self.username
    }

    pub fn password(&self) -> &ProxmoxPassword {
        &self.password
    }

    pub fn realm(&self) -> &ProxmoxRealm {
        &self.realm
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Whether self-signed or otherwise unverifiable TLS certificates are accepted.
    pub fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    pub fn url(&self) -> &ProxmoxUrl {
        &self.url
    }

    /// The `user@realm` form used in tickets and logs.
    pub fn login_name(&self) -> String {
        format!("{}@{}", self.username.as_str(), self.realm.as_str())
    }
}

use serde::Deserialize;

/// The `{"data": ...}` envelope every Proxmox API response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

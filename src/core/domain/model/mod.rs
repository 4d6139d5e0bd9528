pub mod api_response;
pub mod ha;
pub mod inventory;
pub mod node_list_item;
pub mod node_network;
pub mod node_service;
pub mod proxmox_auth;
pub mod proxmox_connection;
pub mod storage;
pub mod vm;

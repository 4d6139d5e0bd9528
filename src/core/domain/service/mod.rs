pub mod dedup;
pub mod disk_join;
pub mod ha_join;
pub mod storage_tagging;

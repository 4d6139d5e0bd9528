mod ha_tests;
mod inventory_tests;
mod node_tests;
mod storage_tests;

//! Adapters implementing the domain ports.

pub mod fake_gateway;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;

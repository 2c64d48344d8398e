//! Persistent key-value storage for per-user state.
//!
//! Values are plain UTF-8 strings; callers own their encoding.
pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use anyhow::Result;
use disk::DiskStore;
use tracing::debug;

pub use memory::MemoryStore;

/// A string key-value store. Every write is durable once it returns.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Opens the on-disk store under the configured data directory.
pub fn open(config: &AppConfig) -> Result<DiskStore> {
    let path = config.default_data_path()?.join("store");
    debug!("Opening store at {}", path.display());
    DiskStore::open(&path)
}

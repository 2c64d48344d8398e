use super::KeyValueStore;
use anyhow::{Context, Result};
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

const PARTITION: &str = "userdata";

/// `fjall`-backed store; all keys live in a single partition.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = Config::new(path)
            .open()
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION, PartitionCreateOptions::default())
            .context("Failed to open store partition")?;
        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.partition.get(key.as_bytes())? {
            Some(value) => {
                debug!("Store HIT for key: {key}");
                Ok(Some(String::from_utf8_lossy(&value).into_owned()))
            }
            None => {
                debug!("Store MISS for key: {key}");
                Ok(None)
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.partition
            .insert(key.as_bytes(), value.as_bytes())
            .with_context(|| format!("Failed to write key {key}"))?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Store PUT for key: {key}");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.partition
            .remove(key.as_bytes())
            .with_context(|| format!("Failed to remove key {key}"))?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Store REMOVE for key: {key}");
        Ok(())
    }
}

//! Named cache partitions.

use super::request::CachedResponse;
use crate::error::{CampusError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage for cached responses, grouped into named partitions.
///
/// Entries never expire on their own; a partition disappears only when it is
/// deleted as a whole.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Create the partition if it does not exist yet.
    async fn open(&self, partition: &str) -> Result<()>;

    /// Store a response, creating the partition if needed and replacing any
    /// previous entry under the same key.
    async fn put(&self, partition: &str, key: &str, response: CachedResponse) -> Result<()>;

    /// Look a key up across all partitions, oldest partition first.
    async fn lookup(&self, key: &str) -> Result<Option<CachedResponse>>;

    /// Like [`lookup`](Self::lookup), but a missing entry is a `CacheMiss` error.
    async fn require(&self, key: &str) -> Result<CachedResponse> {
        self.lookup(key).await?.ok_or_else(|| CampusError::CacheMiss {
            key: key.to_string(),
        })
    }

    /// Partition names in creation order.
    async fn partitions(&self) -> Result<Vec<String>>;

    /// Delete a partition and everything in it. Returns false if it did not exist.
    async fn delete_partition(&self, partition: &str) -> Result<bool>;

    /// Number of entries in a partition (0 if it does not exist).
    async fn entry_count(&self, partition: &str) -> Result<usize>;
}

#[derive(Debug, Default)]
struct Partition {
    name: String,
    entries: HashMap<String, CachedResponse>,
}

/// In-memory [`CacheStore`].
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    partitions: RwLock<Vec<Partition>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn find_or_create<'a>(partitions: &'a mut Vec<Partition>, name: &str) -> &'a mut Partition {
    let index = match partitions.iter().position(|p| p.name == name) {
        Some(index) => index,
        None => {
            partitions.push(Partition {
                name: name.to_string(),
                entries: HashMap::new(),
            });
            partitions.len() - 1
        }
    };
    &mut partitions[index]
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn open(&self, partition: &str) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        find_or_create(&mut partitions, partition);
        Ok(())
    }

    async fn put(&self, partition: &str, key: &str, response: CachedResponse) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        find_or_create(&mut partitions, partition)
            .entries
            .insert(key.to_string(), response);
        Ok(())
    }

    async fn lookup(&self, key: &str) -> Result<Option<CachedResponse>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .iter()
            .find_map(|p| p.entries.get(key))
            .cloned())
    }

    async fn partitions(&self) -> Result<Vec<String>> {
        let partitions = self.partitions.read().await;
        Ok(partitions.iter().map(|p| p.name.clone()).collect())
    }

    async fn delete_partition(&self, partition: &str) -> Result<bool> {
        let mut partitions = self.partitions.write().await;
        let before = partitions.len();
        partitions.retain(|p| p.name != partition);
        Ok(partitions.len() != before)
    }

    async fn entry_count(&self, partition: &str) -> Result<usize> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .iter()
            .find(|p| p.name == partition)
            .map_or(0, |p| p.entries.len()))
    }
}

//! Key/Value Storage
//!
//! String-keyed, string-valued storage with the semantics of browser web
//! storage: whole values are read and replaced, there are no transactions,
//! and a byte quota can reject writes.
//!
//! Backends:
//! - [`MemoryStorage`]: mutex-guarded map, for tests and per-request scopes
//! - [`FileStorage`]: one JSON object file, for data that outlives the process

mod file;
mod memory;

pub use file::{DEFAULT_QUOTA_BYTES, FileStorage};
pub use memory::MemoryStorage;

use std::collections::HashMap;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings
    #[error("Storage file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
}

/// Key/value storage backend
#[trait_variant::make(KeyValueStore: Send)]
pub trait LocalKeyValueStore {
    /// Value under `key`, `None` if absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Bytes used after writing `value` under `key`, counting keys and values
fn projected_usage(entries: &HashMap<String, String>, key: &str, value: &str) -> usize {
    let others: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    others + key.len() + value.len()
}

fn check_quota(
    entries: &HashMap<String, String>,
    key: &str,
    value: &str,
    quota: Option<usize>,
) -> StorageResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let needed = projected_usage(entries, key, value);
    if needed > quota {
        return Err(StorageError::QuotaExceeded { needed, quota });
    }
    Ok(())
}

//! In-memory key/value backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{KeyValueStore, StorageResult, check_quota};

/// In-memory storage using a HashMap.
///
/// Thread-safe; every operation takes the lock for its whole duration and
/// never across an await.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Storage pre-filled with `entries`
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            quota_bytes: None,
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries().clone()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // A panic mid-insert cannot leave the map half-written, so a poisoned
    // lock still guards consistent data.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries();
        check_quota(&entries, key, value, self.quota_bytes)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

//! JSON-file key/value backend.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use super::{KeyValueStore, StorageResult, check_quota};

/// Default quota, the usual per-origin web storage limit
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Persistent storage kept as one JSON object `{ "key": "value", ... }`.
///
/// Every read goes to disk. Writes within this process are serialized and
/// land through a temp file plus rename, so a crash leaves either the old
/// or the new file. Writers in other processes are last-write-wins.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    quota_bytes: Option<usize>,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
            write_lock: Mutex::new(()),
        }
    }

    /// Override the quota; `None` disables it
    pub fn with_quota(mut self, quota_bytes: Option<usize>) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> StorageResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_entries(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let sorted: std::collections::BTreeMap<_, _> = entries.iter().collect();
        let bytes = serde_json::to_vec_pretty(&sorted)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        check_quota(&entries, key, value, self.quota_bytes)?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;

        tracing::debug!(key, path = %self.path.display(), "Storage value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

//! Key/Value Storage Repository Implementation
//!
//! The whole list is one JSON array under a single key. Every append reads the
//! array, pushes, and writes the full array back.

use crate::domain::entities::AccessRequest;
use crate::domain::repository::AccessRequestRepository;
use crate::error::RequestResult;
use platform::storage::KeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Access request repository backed by a [`KeyValueStore`]
pub struct StorageAccessRequestRepository<S> {
    store: Arc<S>,
    key: String,
    // Serializes read-modify-write within this process
    append_lock: Arc<Mutex<()>>,
}

impl<S> Clone for StorageAccessRequestRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
            append_lock: Arc::clone(&self.append_lock),
        }
    }
}

impl<S> StorageAccessRequestRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Absent key reads as an empty list
    async fn load(&self) -> RequestResult<Vec<AccessRequest>> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

impl<S> AccessRequestRepository for StorageAccessRequestRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn find_all(&self) -> RequestResult<Vec<AccessRequest>> {
        self.load().await
    }

    async fn append(&self, request: AccessRequest) -> RequestResult<AccessRequest> {
        let _guard = self.append_lock.lock().await;

        let mut requests = self.load().await?;
        let request = match requests.iter().map(|r| r.id).max() {
            Some(latest) => request.placed_after(latest),
            None => request,
        };
        requests.push(request.clone());

        let raw = serde_json::to_string(&requests)?;
        self.store.set(&self.key, &raw).await?;

        tracing::debug!(key = %self.key, total = requests.len(), "Access request list written");
        Ok(request)
    }
}

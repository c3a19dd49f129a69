//! Key/Value Session Repository Implementation

use std::sync::Arc;

use platform::storage::KeyValueStore;

use crate::application::config::{AUTH_EMAIL_KEY, AUTH_TIME_KEY, AUTH_TOKEN_KEY, SESSION_KEYS};
use crate::domain::entity::session_marker::SessionMarker;
use crate::domain::repository::{MarkerLookup, SessionMarkerRepository};
use crate::error::AuthResult;

/// Session marker repository over one session-scoped [`KeyValueStore`]
pub struct StorageSessionRepository<S> {
    store: Arc<S>,
}

impl<S> Clone for StorageSessionRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> StorageSessionRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> SessionMarkerRepository for StorageSessionRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn find(&self) -> AuthResult<MarkerLookup> {
        let token = self.store.get(AUTH_TOKEN_KEY).await?;
        let email = self.store.get(AUTH_EMAIL_KEY).await?;
        let time = self.store.get(AUTH_TIME_KEY).await?;

        let lookup = match (token, email, time) {
            (None, None, None) => MarkerLookup::Missing,
            (Some(token), Some(email), Some(time)) => {
                match SessionMarker::restore(&token, &email, &time) {
                    Some(marker) => MarkerLookup::Found(marker),
                    None => MarkerLookup::Malformed,
                }
            }
            _ => MarkerLookup::Malformed,
        };
        Ok(lookup)
    }

    async fn save(&self, marker: &SessionMarker) -> AuthResult<()> {
        self.store.set(AUTH_TOKEN_KEY, &marker.token).await?;
        self.store.set(AUTH_EMAIL_KEY, &marker.email).await?;
        self.store
            .set(AUTH_TIME_KEY, &marker.issued_at_ms.to_string())
            .await?;
        Ok(())
    }

    async fn delete(&self) -> AuthResult<()> {
        for key in SESSION_KEYS {
            self.store.remove(key).await?;
        }
        Ok(())
    }
}

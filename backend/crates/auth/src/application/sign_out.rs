//! Sign Out Use Case

use std::sync::Arc;

use crate::domain::repository::SessionMarkerRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionMarkerRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionMarkerRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Remove the marker whether or not one exists
    pub async fn execute(&self) -> AuthResult<()> {
        self.session_repo.delete().await?;
        tracing::info!("Admin signed out");
        Ok(())
    }
}

//! List Requests Use Case

use crate::domain::entities::AccessRequest;
use crate::domain::repository::AccessRequestRepository;
use std::sync::Arc;

/// List Requests Use Case
///
/// Never fails: an unreadable list is reported as empty and logged.
pub struct ListRequestsUseCase<R>
where
    R: AccessRequestRepository,
{
    repo: Arc<R>,
}

impl<R> ListRequestsUseCase<R>
where
    R: AccessRequestRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Vec<AccessRequest> {
        match self.repo.find_all().await {
            Ok(requests) => requests,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read access requests, listing none");
                Vec::new()
            }
        }
    }
}

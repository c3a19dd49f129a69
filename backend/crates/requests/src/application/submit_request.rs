//! Submit Request Use Case

use crate::application::config::RequestsConfig;
use crate::domain::entities::AccessRequest;
use crate::domain::repository::AccessRequestRepository;
use crate::domain::value_objects::{Purpose, RequesterName};
use crate::error::{RequestError, RequestResult};
use kernel::clock::SharedClock;
use kernel::email::Email;
use std::sync::Arc;

/// Input DTO for submit request
#[derive(Debug, Clone)]
pub struct SubmitRequestInput {
    pub name: String,
    pub email: String,
    pub purpose: String,
}

/// Submit Request Use Case
pub struct SubmitRequestUseCase<R>
where
    R: AccessRequestRepository,
{
    repo: Arc<R>,
    config: Arc<RequestsConfig>,
    clock: SharedClock,
}

impl<R> SubmitRequestUseCase<R>
where
    R: AccessRequestRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<RequestsConfig>, clock: SharedClock) -> Self {
        Self {
            repo,
            config,
            clock,
        }
    }

    pub async fn execute(&self, input: SubmitRequestInput) -> RequestResult<AccessRequest> {
        let name = RequesterName::new(input.name)?;
        Email::new(&input.email).map_err(|e| RequestError::Validation(e.message().to_string()))?;
        let purpose: Purpose = input.purpose.parse()?;

        let request = AccessRequest::new(name, input.email, purpose, self.clock.now());
        let stored = self.repo.append(request).await?;

        tracing::info!(
            request_id = %stored.id,
            purpose = %stored.purpose,
            "Access request submitted"
        );

        if !self.config.submit_delay.is_zero() {
            tokio::time::sleep(self.config.submit_delay).await;
        }

        Ok(stored)
    }
}

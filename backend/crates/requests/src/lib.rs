//! Access Request Store
//!
//! Clean Architecture structure:
//! - `domain/` - AccessRequest entity, value objects, repository trait
//! - `application/` - Submit and list use cases
//! - `infra/` - Key/value storage implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Storage Model
//! - All requests live as one JSON array under a single storage key
//! - Append-only: no code path updates or deletes a stored request
//! - Insertion order is creation order; ids are unique epoch milliseconds
//! - Reads never fail the caller: an unreadable list is listed as empty

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{ACCESS_REQUESTS_KEY, RequestsConfig};
pub use error::{RequestError, RequestResult};
pub use infra::storage::StorageAccessRequestRepository;
pub use presentation::router::requests_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

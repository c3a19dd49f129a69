//! Projects Listing
//!
//! Public GitHub repositories shown on the portfolio's projects page.
//!
//! Clean Architecture structure:
//! - `domain/` - Project entity, showcase selection, repository source trait
//! - `application/` - List projects use case
//! - `infra/` - GitHub REST client
//! - `presentation/` - HTTP handler, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProjectsConfig;
pub use error::{ProjectsError, ProjectsResult};
pub use infra::github::GitHubClient;
pub use presentation::router::projects_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;

//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (AccessRequest)
//! - Domain value objects (Purpose, RequesterName)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;

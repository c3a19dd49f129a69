//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod list_requests;
pub mod submit_request;

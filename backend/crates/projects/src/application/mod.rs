//! Application Layer - Use Cases

pub mod config;
pub mod list_projects;

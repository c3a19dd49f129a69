//! Infrastructure Layer

pub mod github;

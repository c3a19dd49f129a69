//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, email)
//! - The injectable clock every time-dependent rule reads from
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod clock;
pub mod email;
pub mod id;

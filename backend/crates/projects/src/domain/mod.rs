//! Domain Layer

pub mod entities;
pub mod showcase;
pub mod source;

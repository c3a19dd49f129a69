//! Infrastructure Layer
//!
//! Repository implementations over platform key/value storage.

pub mod storage;

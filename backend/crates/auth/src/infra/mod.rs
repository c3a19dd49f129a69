//! Infrastructure Layer
//!
//! Session storage over platform key/value storage, and the fixed admin credential.

pub mod fixed_credential;
pub mod session_storage;

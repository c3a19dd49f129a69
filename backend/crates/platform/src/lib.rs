//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Key/value storage backends (in-memory and JSON file)
//! - The rolling checksum used by the admin credential check
//! - Base64 helpers and constant-time comparison
//! - Cookie management

pub mod checksum;
pub mod cookie;
pub mod crypto;
pub mod storage;

//! Cryptographic utilities
//!
//! This module provides:
//! - SHA-256 hashing
//! - The 256-bit block digest type

pub mod hash;

pub use hash::{double_sha256, sha256, BlockHash, HashError};

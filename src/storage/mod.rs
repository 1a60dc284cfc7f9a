//! Block index storage
//!
//! The known-block index supplied by the node's storage layer. This crate
//! only reads it; ownership and mutation belong to the caller.

pub mod index;

pub use index::{BlockIndex, BlockIndexEntry};

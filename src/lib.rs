//! Chain-Checkpoints: hardcoded checkpoint subsystem for a blockchain full node
//!
//! This crate provides the trusted-anchor policy layer a full node consults
//! during validation and sync:
//! - Per-network hardcoded checkpoint tables (main and test)
//! - Candidate-block validation against pinned hashes
//! - Work-weighted verification progress estimation
//! - Resolution of the most recent trusted anchor in the block index
//!
//! All operations are pure reads over immutable data and safe to call
//! concurrently. Block download, script verification, networking, and the
//! block index itself belong to external collaborators.
//!
//! # Example
//!
//! ```rust
//! use chain_checkpoints::checkpoints::Checkpoints;
//! use chain_checkpoints::crypto::BlockHash;
//!
//! let checkpoints = Checkpoints::mainnet();
//!
//! // Heights without a pinned hash are unconstrained
//! let candidate = BlockHash::of_header(b"some block header");
//! assert!(checkpoints.check_block(5000, &candidate));
//!
//! // Pinned heights demand an exact match
//! assert!(!checkpoints.check_block(10000, &candidate));
//!
//! // Rough height target for sync progress UI
//! assert_eq!(checkpoints.total_blocks_estimate(), 146_109);
//! ```

pub mod checkpoints;
pub mod cli;
pub mod core;
pub mod crypto;
pub mod storage;

// Re-export commonly used types
pub use checkpoints::{
    CheckpointConfig, CheckpointData, Checkpoints, SIGCHECK_VERIFICATION_FACTOR,
};
pub use core::Network;
pub use crypto::{BlockHash, HashError};
pub use storage::{BlockIndex, BlockIndexEntry};

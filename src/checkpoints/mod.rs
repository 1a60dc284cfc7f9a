//! Checkpoint System
//!
//! Hardcoded checkpoints for chain security and sync progress:
//! - Reject alternate histories that diverge below a known-good anchor
//! - Estimate how far initial block verification has progressed
//! - Locate the highest trusted anchor already in the block index
//!
//! All operations are pure reads over an immutable dataset; the whole type is
//! safe to share across threads without locking.

pub mod data;
pub mod progress;

pub use data::CheckpointData;
pub use progress::SIGCHECK_VERIFICATION_FACTOR;

use crate::core::Network;
use crate::crypto::BlockHash;
use crate::storage::{BlockIndex, BlockIndexEntry};
use serde::{Deserialize, Serialize};

// =============================================================================
// Configuration
// =============================================================================

/// Checkpoint subsystem configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Which network's dataset is active
    pub network: Network,
    /// Whether checkpoint enforcement is on (operators may turn it off)
    pub enforce: bool,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            network: Network::Main,
            enforce: true,
        }
    }
}

// =============================================================================
// Checkpoints
// =============================================================================

/// Checkpoint registry plus enforcement switch
#[derive(Debug, Clone)]
pub struct Checkpoints {
    data: CheckpointData,
    enforce: bool,
}

impl Checkpoints {
    pub fn new(network: Network, enforce: bool) -> Self {
        Self {
            data: CheckpointData::for_network(network),
            enforce,
        }
    }

    pub fn from_config(config: &CheckpointConfig) -> Self {
        Self::new(config.network, config.enforce)
    }

    /// Production network checkpoints with enforcement on
    pub fn mainnet() -> Self {
        Self::new(Network::Main, true)
    }

    /// Test network checkpoints with enforcement on
    pub fn testnet() -> Self {
        Self::new(Network::Test, true)
    }

    /// The active dataset
    pub fn data(&self) -> &CheckpointData {
        &self.data
    }

    /// Whether enforcement is on
    pub fn is_enforced(&self) -> bool {
        self.enforce
    }

    /// Validate a candidate block against the pinned hash at its height
    ///
    /// Returns true when there is nothing to enforce (enforcement off, or no
    /// anchor at this height). A false result means the candidate chain
    /// diverges from the canonical one below the checkpoint frontier and must
    /// be rejected by the caller regardless of claimed work.
    pub fn check_block(&self, height: u64, hash: &BlockHash) -> bool {
        if !self.enforce {
            return true;
        }

        match self.data.get(height) {
            None => true,
            Some(pinned) if pinned == hash => true,
            Some(pinned) => {
                log::warn!(
                    "checkpoint mismatch at height {}: expected {}, got {}",
                    height,
                    pinned,
                    hash
                );
                false
            }
        }
    }

    /// Rough height target for sync-progress reporting
    ///
    /// The height of the highest anchor, or 0 when enforcement is off.
    pub fn total_blocks_estimate(&self) -> u64 {
        if !self.enforce {
            return 0;
        }
        self.data.highest_height()
    }

    /// Find the most recent trusted anchor present in the known-block index
    ///
    /// Walks anchors from highest height to lowest so sync can resume from
    /// the newest trusted point and minimize re-verification.
    pub fn last_checkpoint<'a>(&self, index: &'a BlockIndex) -> Option<&'a BlockIndexEntry> {
        if !self.enforce {
            return None;
        }

        for (height, hash) in self.data.iter_rev() {
            if let Some(entry) = index.get_by_hash(hash) {
                log::debug!("last trusted checkpoint at height {}", height);
                return Some(entry);
            }
        }
        None
    }

    /// Estimate verification progress at the given block-index entry
    ///
    /// Returns 0.0 when no entry is available (startup case).
    pub fn verification_progress(&self, entry: Option<&BlockIndexEntry>, now: i64) -> f64 {
        match entry {
            None => 0.0,
            Some(e) => self.data.estimate_progress(e.chain_tx_count, e.timestamp, now),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

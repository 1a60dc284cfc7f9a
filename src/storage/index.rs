//! Block Indexing
//!
//! In-memory index of known blocks, keyed by hash:
//! - Lookup by hash (any known block)
//! - Lookup by height (main chain only)
//! - Best-tip tracking

use crate::crypto::BlockHash;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Block Index Entry
// =============================================================================

/// Information about a known block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockIndexEntry {
    /// Block hash
    pub hash: BlockHash,
    /// Block height
    pub height: u64,
    /// Cumulative transaction count in the chain up to and including this block
    pub chain_tx_count: u64,
    /// Block timestamp (Unix seconds)
    pub timestamp: i64,
}

impl BlockIndexEntry {
    pub fn new(hash: BlockHash, height: u64, chain_tx_count: u64, timestamp: i64) -> Self {
        Self {
            hash,
            height,
            chain_tx_count,
            timestamp,
        }
    }
}

// =============================================================================
// Block Index
// =============================================================================

/// Index for efficient block lookups
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BlockIndex {
    /// Blocks by hash
    by_hash: HashMap<BlockHash, BlockIndexEntry>,
    /// Block hash by height (main chain)
    by_height: HashMap<u64, BlockHash>,
    /// Best chain tip hash
    pub best_block: Option<BlockHash>,
    /// Best chain height
    pub best_height: u64,
}

impl BlockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the index
    pub fn add_block(&mut self, entry: BlockIndexEntry) {
        let hash = entry.hash;
        let height = entry.height;

        self.by_hash.insert(hash, entry);
        self.by_height.insert(height, hash);

        if height >= self.best_height {
            self.best_height = height;
            self.best_block = Some(hash);
        }
    }

    /// Get block entry by hash
    pub fn get_by_hash(&self, hash: &BlockHash) -> Option<&BlockIndexEntry> {
        self.by_hash.get(hash)
    }

    /// Get block hash by height (main chain only)
    pub fn get_by_height(&self, height: u64) -> Option<&BlockHash> {
        self.by_height.get(&height)
    }

    /// Get the best (highest) known entry
    pub fn best_entry(&self) -> Option<&BlockIndexEntry> {
        self.best_block.as_ref().and_then(|h| self.by_hash.get(h))
    }

    /// Check if block exists
    pub fn contains(&self, hash: &BlockHash) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// Get total indexed blocks
    pub fn len(&self) -> usize {
        self.by_hash.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.by_hash.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::double_sha256;

    fn entry(label: &[u8], height: u64) -> BlockIndexEntry {
        let hash = BlockHash::from_bytes(double_sha256(label));
        BlockIndexEntry::new(hash, height, height * 10, 1_484_000_000 + height as i64)
    }

    #[test]
    fn test_block_index() {
        let mut index = BlockIndex::new();
        let e = entry(b"block-0", 0);
        let hash = e.hash;

        index.add_block(e);

        assert!(index.contains(&hash));
        assert_eq!(index.get_by_height(0), Some(&hash));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_best_tip_tracking() {
        let mut index = BlockIndex::new();
        index.add_block(entry(b"block-5", 5));
        index.add_block(entry(b"block-9", 9));
        index.add_block(entry(b"block-7", 7));

        assert_eq!(index.best_height, 9);
        assert_eq!(index.best_entry().map(|e| e.height), Some(9));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut index = BlockIndex::new();
        index.add_block(entry(b"block-3", 3));

        let json = serde_json::to_string(&index).unwrap();
        let back: BlockIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.best_height, 3);
    }
}

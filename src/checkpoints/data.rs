//! Hardcoded checkpoint datasets
//!
//! One dataset per network, baked in at release time. Each maps a set of
//! heights to the canonical block hash at that height, plus summary
//! statistics about the most recent anchor used for progress estimation.
//!
//! What makes a good checkpoint block?
//! + Is surrounded by blocks with reasonable timestamps
//!   (no blocks before with a timestamp after, none after with
//!    timestamp before)
//! + Contains no strange transactions

use crate::core::Network;
use crate::crypto::BlockHash;
use std::collections::BTreeMap;

/// Production network anchors
const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (0, "000000008afd70438709390e1a1b4e64c81437ffb244d785b7d6029d7b1ac95e"),
    (10000, "000000000000125fd54be59819f8cef68167bb1b064517a7d35c1c73e7a8c6f3"),
    (25000, "0000000000002e1eb82c917aec77ae62d95042dc65351593d6c5e167a229c3d8"),
    (34000, "000000000001a77d7352b9775bd818b7056fd34c8f63952170a8d1673acc6562"),
    (55000, "000000000000d03bcb0e927a6d65757ed27eb2dffca86d0640ebf1b291051df5"),
    (75000, "0000000000000346a0dc1f7ed454755546d4f77b9f41d46821df1f2c5cd57b41"),
    (87000, "00000000000029b187a4a87d719881f1a994e668e4d5a4ab059740e0a7e54bd5"),
    (104461, "0000000000001109eef20731db900bc94b26c9fbbdd124724935dcf5512dbcdd"),
    (110000, "0000000000002fe1681e61788ffc3d82a18fcf15de2ee92c866730dfd7e35098"),
    (124521, "00000000000016850a96fb10bf6d5d920ae3ca7b55b6d72e54cfd3cd989df340"),
    (141912, "0000000000000a681fd1083e8e734cf3c211826bbd678a3a7a56786d8df4e3b5"),
    (145101, "00000000000004594ad16a99c360b29d50a2356b3319b7da98edcc917dd78e4b"),
    (146109, "00000000000004cee6fc9f080fe4d0e102102c9049f8ebde5c1e3e922992410b"),
];

/// Test network anchors
const TESTNET_CHECKPOINTS: &[(u64, &str)] = &[(
    546,
    "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70",
)];

// =============================================================================
// Checkpoint Dataset
// =============================================================================

/// Immutable per-network checkpoint dataset
///
/// Constructed once at startup and never mutated; all fields describe state
/// as of the highest-height anchor in the table.
#[derive(Debug, Clone)]
pub struct CheckpointData {
    /// Height -> canonical block hash, heights strictly increasing
    checkpoints: BTreeMap<u64, BlockHash>,
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total transactions between genesis and the last checkpoint
    pub last_checkpoint_tx_count: u64,
    /// Estimated transactions per day after the last checkpoint
    pub tx_per_day_estimate: f64,
}

impl CheckpointData {
    fn from_table(
        table: &[(u64, &str)],
        last_checkpoint_time: i64,
        last_checkpoint_tx_count: u64,
        tx_per_day_estimate: f64,
    ) -> Self {
        let checkpoints = table
            .iter()
            .map(|&(height, hex)| {
                let hash = BlockHash::from_hex(hex).expect("hardcoded checkpoint hash");
                (height, hash)
            })
            .collect();

        Self {
            checkpoints,
            last_checkpoint_time,
            last_checkpoint_tx_count,
            tx_per_day_estimate,
        }
    }

    /// Production network dataset
    pub fn mainnet() -> Self {
        Self::from_table(MAINNET_CHECKPOINTS, 1_484_138_400, 185_062, 5000.0)
    }

    /// Test network dataset
    pub fn testnet() -> Self {
        Self::from_table(TESTNET_CHECKPOINTS, 1_338_180_505, 16_341, 300.0)
    }

    /// Dataset for the given network identity
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => Self::mainnet(),
            Network::Test => Self::testnet(),
        }
    }

    /// Canonical hash pinned at a height, if any
    pub fn get(&self, height: u64) -> Option<&BlockHash> {
        self.checkpoints.get(&height)
    }

    /// Height of the highest anchor
    pub fn highest_height(&self) -> u64 {
        self.checkpoints
            .keys()
            .next_back()
            .copied()
            .unwrap_or_default()
    }

    /// Anchors in ascending height order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &BlockHash)> {
        self.checkpoints.iter().map(|(&h, hash)| (h, hash))
    }

    /// Anchors in descending height order (most recent first)
    pub fn iter_rev(&self) -> impl Iterator<Item = (u64, &BlockHash)> {
        self.checkpoints.iter().rev().map(|(&h, hash)| (h, hash))
    }

    /// Number of anchors
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_table() {
        let data = CheckpointData::mainnet();
        assert_eq!(data.len(), 13);
        assert_eq!(data.highest_height(), 146_109);
        assert_eq!(data.last_checkpoint_tx_count, 185_062);
        assert!(data.get(0).is_some());
        assert!(data.get(1).is_none());
    }

    #[test]
    fn test_testnet_table() {
        let data = CheckpointData::testnet();
        assert_eq!(data.len(), 1);
        assert_eq!(data.highest_height(), 546);
    }

    #[test]
    fn test_heights_strictly_increasing() {
        let data = CheckpointData::mainnet();
        let heights: Vec<u64> = data.iter().map(|(h, _)| h).collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_iter_rev_descends() {
        let data = CheckpointData::mainnet();
        let first = data.iter_rev().next().map(|(h, _)| h);
        assert_eq!(first, Some(146_109));
    }

    #[test]
    fn test_for_network() {
        assert_eq!(
            CheckpointData::for_network(Network::Main).highest_height(),
            CheckpointData::mainnet().highest_height()
        );
        assert_eq!(
            CheckpointData::for_network(Network::Test).highest_height(),
            CheckpointData::testnet().highest_height()
        );
    }
}

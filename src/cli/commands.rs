//! CLI commands for the checkpoint subsystem
//!
//! Implements all command handlers for the CLI interface.

use crate::checkpoints::Checkpoints;
use crate::crypto::BlockHash;
use crate::storage::BlockIndex;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// List the active checkpoint table
pub fn cmd_list(checkpoints: &Checkpoints) -> CliResult<()> {
    let data = checkpoints.data();

    println!("📌 {} checkpoint(s):", data.len());
    for (height, hash) in data.iter() {
        println!("   {:>8}  {}", height, hash);
    }

    Ok(())
}

/// Show dataset summary statistics
pub fn cmd_info(checkpoints: &Checkpoints) -> CliResult<()> {
    let data = checkpoints.data();
    let last_time = format_timestamp(data.last_checkpoint_time);

    println!("📌 Checkpoint dataset:");
    println!("   Anchors: {}", data.len());
    println!("   Highest height: {}", data.highest_height());
    println!("   Last checkpoint time: {}", last_time);
    println!("   Transactions to last checkpoint: {}", data.last_checkpoint_tx_count);
    println!("   Estimated tx/day after checkpoint: {}", data.tx_per_day_estimate);
    println!("   Enforcement: {}", if checkpoints.is_enforced() { "on" } else { "off" });
    println!("   Total blocks estimate: {}", checkpoints.total_blocks_estimate());

    Ok(())
}

/// Validate a (height, hash) pair against the active table
///
/// Returns whether the block passed, so `main` can set the exit status.
pub fn cmd_check(checkpoints: &Checkpoints, height: u64, hash: &str) -> CliResult<bool> {
    let hash = BlockHash::from_hex(hash)?;
    let ok = checkpoints.check_block(height, &hash);

    if ok {
        match checkpoints.data().get(height) {
            Some(_) => println!("✅ Block at height {} matches its checkpoint", height),
            None => println!("✅ No checkpoint at height {}, nothing to enforce", height),
        }
    } else {
        println!("❌ Checkpoint mismatch at height {}!", height);
        println!("   Expected: {}", checkpoints.data().get(height).map(|h| h.to_string()).unwrap_or_default());
        println!("   Got:      {}", hash);
    }

    Ok(ok)
}

/// Print estimated verification progress
pub fn cmd_progress(
    checkpoints: &Checkpoints,
    tx_count: u64,
    block_time: i64,
    now: Option<i64>,
) -> CliResult<()> {
    let now = now.unwrap_or_else(|| Utc::now().timestamp());
    let progress = checkpoints
        .data()
        .estimate_progress(tx_count, block_time, now);

    println!("⏳ Verification progress: {:.2}%", progress * 100.0);
    println!("   Chain transactions: {}", tx_count);
    println!("   Block time: {}", format_timestamp(block_time));
    println!("   As of: {}", format_timestamp(now));

    Ok(())
}

/// Resolve the most recent trusted anchor in a JSON block index file
pub fn cmd_last(checkpoints: &Checkpoints, index_file: &Path) -> CliResult<()> {
    let index = load_index(index_file)?;
    println!("📂 Loaded {} known block(s) from {:?}", index.len(), index_file);

    match checkpoints.last_checkpoint(&index) {
        Some(entry) => {
            println!("✅ Last trusted checkpoint:");
            println!("   Height: {}", entry.height);
            println!("   Hash: {}", entry.hash);
            println!("   Chain transactions: {}", entry.chain_tx_count);
            println!("   Time: {}", format_timestamp(entry.timestamp));
        }
        None => {
            println!("ℹ️  No checkpoint hash present in the index");
        }
    }

    Ok(())
}

/// Load a block index from a JSON file
pub fn load_index(path: &Path) -> CliResult<BlockIndex> {
    let data = fs::read_to_string(path)?;
    let index = serde_json::from_str(&data)?;
    Ok(index)
}

fn format_timestamp(ts: i64) -> String {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("@{}", ts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::BlockIndexEntry;
    use std::io::Write;

    #[test]
    fn test_load_index_from_file() {
        let mut index = BlockIndex::new();
        let genesis = Checkpoints::mainnet();
        let hash = *genesis.data().get(0).unwrap();
        index.add_block(BlockIndexEntry::new(hash, 0, 1, 1_231_006_505));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&index).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_index(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains(&hash));
    }

    #[test]
    fn test_cmd_check_verdicts() {
        let checkpoints = Checkpoints::mainnet();
        let pinned = checkpoints.data().get(10_000).unwrap().to_string();

        assert!(cmd_check(&checkpoints, 10_000, &pinned).unwrap());
        assert!(!cmd_check(&checkpoints, 10_000, &"11".repeat(32)).unwrap());
        assert!(cmd_check(&checkpoints, 5_000, &"11".repeat(32)).unwrap());
        assert!(cmd_check(&checkpoints, 10_000, "not-a-hash").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_484_138_400), "2017-01-11 12:40:00 UTC");
    }
}

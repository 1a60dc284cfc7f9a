//! Verification progress estimation
//!
//! Guesses how far initial block verification has progressed, measured in
//! transaction-verification work. Transactions at or before the last
//! checkpoint are cheap (already anchored); transactions after it still need
//! full signature checks and are weighted accordingly.

use super::data::CheckpointData;

/// How many times we expect transactions after the last checkpoint to
/// be slower. This number is a compromise, as it can't be accurate for
/// every system. When reindexing from a fast disk with a slow CPU, it
/// can be up to 20, while when downloading from a slow network with a
/// fast multicore CPU, it won't be much higher than 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

impl CheckpointData {
    /// Estimate verification progress as a fraction in `[0.0, 1.0]`
    ///
    /// `chain_tx_count` and `block_time` describe the block being verified;
    /// `now` is the current wall-clock time in Unix seconds.
    pub fn estimate_progress(&self, chain_tx_count: u64, block_time: i64, now: i64) -> f64 {
        let work_before;
        let work_after;

        if chain_tx_count <= self.last_checkpoint_tx_count {
            let cheap_before = chain_tx_count as f64;
            let cheap_after = (self.last_checkpoint_tx_count - chain_tx_count) as f64;
            let expensive_after = self.tx_since(self.last_checkpoint_time, now);
            work_before = cheap_before;
            work_after = cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR;
        } else {
            let cheap_before = self.last_checkpoint_tx_count as f64;
            let expensive_before = (chain_tx_count - self.last_checkpoint_tx_count) as f64;
            let expensive_after = self.tx_since(block_time, now);
            work_before = cheap_before + expensive_before * SIGCHECK_VERIFICATION_FACTOR;
            work_after = expensive_after * SIGCHECK_VERIFICATION_FACTOR;
        }

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        (work_before / total).clamp(0.0, 1.0)
    }

    /// Transactions expected to accrue between `since` and `now` at the
    /// dataset's daily rate, floored at zero for clocks behind `since`
    fn tx_since(&self, since: i64, now: i64) -> f64 {
        ((now - since) as f64 / SECONDS_PER_DAY * self.tx_per_day_estimate).max(0.0)
    }
}

//! Checkpoint validation and sync estimation.
//!
//! Every function takes the network kind and the node's `-checkpoints`
//! setting explicitly; nothing here reads process-wide state. The defaults
//! are deliberately permissive: an unknown height or a missing index entry
//! never blocks progress. The single hard signal this module produces is
//! [`check_block`] returning `false`, which the caller must treat as a
//! consensus rejection of that candidate block.
//!
//! The node layer should call [`check_block`] when connecting a block whose
//! height is known, [`is_below_last_checkpoint`] before accepting a reorg
//! that would disconnect old blocks, and [`last_checkpoint`] once at index
//! load to pick a fast-forward point for initial validation.

use chrono::Utc;
use tracing::{debug, warn};

use lode_core::chain_view::{ChainView, IndexEntry};
use lode_core::constants::NetworkKind;
use lode_core::types::Hash256;

use crate::data::{CheckpointSet, SIGCHECK_VERIFICATION_FACTOR, active_set};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Verify a candidate block at `height` against the active checkpoint table.
///
/// Returns `true` when the block is acceptable: the test network has no
/// enforced checkpoints, enforcement may be switched off, and heights
/// without a checkpoint are unconstrained. Returns `false` only on a hash
/// mismatch at a checkpointed height.
pub fn check_block(network: NetworkKind, enabled: bool, height: u64, hash: &Hash256) -> bool {
    if network.is_test() || !enabled {
        return true;
    }
    check_block_with(active_set(network), height, hash)
}

/// Like [`check_block`] but against an explicit set, with no gating.
///
/// This is the testable core: production code goes through [`check_block`],
/// while tests can supply their own set.
pub fn check_block_with(set: &CheckpointSet, height: u64, hash: &Hash256) -> bool {
    match set.hash_at(height) {
        None => true,
        Some(expected) if expected == hash => true,
        Some(expected) => {
            warn!(height, expected = %expected, got = %hash, "checkpoint hash mismatch");
            false
        }
    }
}

/// Estimate how far initial-sync verification has progressed at `entry`,
/// as a fraction in `[0, 1]`. Returns 0.0 when no entry is available.
///
/// Uses the wall clock to project how much chain remains; see
/// [`guess_verification_progress_at`] for the arithmetic.
pub fn guess_verification_progress(network: NetworkKind, entry: Option<&IndexEntry>) -> f64 {
    guess_verification_progress_at(active_set(network), entry, Utc::now().timestamp())
}

/// The pure core of [`guess_verification_progress`].
///
/// Transactions up to the set's last checkpoint count one unit of work each
/// (trust-anchored replay); transactions after it count
/// [`SIGCHECK_VERIFICATION_FACTOR`] units (full signature verification).
/// The unverified tail beyond `entry` is projected from the set's
/// transactions/day estimate and the time elapsed since the last checkpoint
/// (or since `entry` itself, once past the checkpoint). This is a heuristic
/// for UI display, not a measurement; its exact shape is kept stable.
pub fn guess_verification_progress_at(
    set: &CheckpointSet,
    entry: Option<&IndexEntry>,
    now_secs: i64,
) -> f64 {
    let Some(entry) = entry else {
        return 0.0;
    };

    let tx_ckpt = set.tx_count_last_checkpoint() as f64;
    let now = now_secs as f64;

    let (work_before, work_after) = if entry.chain_tx <= set.tx_count_last_checkpoint() {
        let cheap_before = entry.chain_tx as f64;
        let cheap_after = tx_ckpt - cheap_before;
        let expensive_after =
            (now - set.time_last_checkpoint() as f64) / SECONDS_PER_DAY * set.tx_per_day();
        (
            cheap_before,
            cheap_after + expensive_after * SIGCHECK_VERIFICATION_FACTOR,
        )
    } else {
        let expensive_before = (entry.chain_tx - set.tx_count_last_checkpoint()) as f64;
        let expensive_after = (now - entry.timestamp as f64) / SECONDS_PER_DAY * set.tx_per_day();
        (
            tx_ckpt + expensive_before * SIGCHECK_VERIFICATION_FACTOR,
            expensive_after * SIGCHECK_VERIFICATION_FACTOR,
        )
    };

    let total = work_before + work_after;
    if total == 0.0 {
        return 0.0;
    }
    work_before / total
}

/// Height of the highest checkpoint, as a lower bound on total chain length
/// for progress display. Returns 0 on the test network or when checkpoints
/// are disabled.
pub fn total_blocks_estimate(network: NetworkKind, enabled: bool) -> u64 {
    if network.is_test() || !enabled {
        return 0;
    }
    active_set(network).max_height()
}

/// Find the deepest checkpoint block already present in the block index.
///
/// Probes `view` with each checkpoint hash from the highest height strictly
/// downward and returns the first hit, so initial validation can safely
/// skip everything at or below it. Returns `None` on the test network, when
/// checkpoints are disabled, or when no checkpoint block is in the index.
///
/// The caller owns `view` and must hold whatever lock protects it for the
/// duration of the call; only point lookups are performed.
pub fn last_checkpoint(
    network: NetworkKind,
    enabled: bool,
    view: &dyn ChainView,
) -> Option<IndexEntry> {
    if network.is_test() || !enabled {
        return None;
    }
    last_checkpoint_with(active_set(network), view)
}

/// Like [`last_checkpoint`] but against an explicit set, with no gating.
pub fn last_checkpoint_with(set: &CheckpointSet, view: &dyn ChainView) -> Option<IndexEntry> {
    for &(height, hash) in set.entries().iter().rev() {
        if let Some(entry) = view.node_by_hash(&hash) {
            debug!(height, "deepest checkpoint present in block index");
            return Some(entry);
        }
    }
    None
}

/// Whether `height` is at or below the highest checkpoint on this network.
///
/// The node layer rejects any reorg that would disconnect blocks at or
/// below this height, because those blocks are pinned. Returns `false` on
/// the test network or when checkpoints are disabled.
pub fn is_below_last_checkpoint(network: NetworkKind, enabled: bool, height: u64) -> bool {
    if network.is_test() || !enabled {
        return false;
    }
    height <= active_set(network).max_height()
}

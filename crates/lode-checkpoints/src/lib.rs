//! # lode-checkpoints: hard-coded trust anchors for the Lode chain.
//!
//! A checkpoint pins a known-good `(height, block hash)` pair per network.
//! The node layer uses them three ways during sync:
//!
//! - [`service::check_block`] rejects any candidate block at a checkpointed
//!   height whose hash does not match, bounding how deep a reorg can reach.
//! - [`service::guess_verification_progress`] and
//!   [`service::total_blocks_estimate`] feed the sync-progress UI.
//! - [`service::last_checkpoint`] finds the deepest checkpoint already in
//!   the block index so initial scanning can skip ahead of it.
//!
//! The checkpoint tables are compiled into the binary ([`data`]); an
//! attacker would have to distribute a modified binary to tamper with them,
//! which is outside our threat model. Everything here is stateless and
//! read-only, so concurrent calls need no synchronization on this side.
//! [`service::last_checkpoint`] only requires that the caller hold its own
//! block-index lock across the call.

pub mod data;
pub mod service;

pub use data::{CheckpointSet, SIGCHECK_VERIFICATION_FACTOR, active_set};
pub use service::{
    check_block, guess_verification_progress, is_below_last_checkpoint, last_checkpoint,
    total_blocks_estimate,
};

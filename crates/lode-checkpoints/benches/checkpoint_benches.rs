//! Criterion benchmarks for the checkpoint service hot paths.
//!
//! `check_block` sits on the block-connection path and runs once per block;
//! `last_checkpoint` runs once per index load but scans the whole table in
//! the worst case.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lode_checkpoints::service::{
    check_block, guess_verification_progress_at, last_checkpoint_with,
};
use lode_checkpoints::{CheckpointSet, active_set};
use lode_core::chain_view::{IndexEntry, MemoryChainView};
use lode_core::constants::NetworkKind;
use lode_core::types::Hash256;

fn mainnet() -> &'static CheckpointSet {
    active_set(NetworkKind::Mainnet)
}

fn bench_check_block(c: &mut Criterion) {
    let tip_hash = *mainnet().hash_at(120_000).unwrap();

    c.bench_function("check_block_checkpointed_height", |b| {
        b.iter(|| {
            check_block(
                NetworkKind::Mainnet,
                true,
                black_box(120_000),
                black_box(&tip_hash),
            )
        })
    });

    c.bench_function("check_block_unconstrained_height", |b| {
        b.iter(|| {
            check_block(
                NetworkKind::Mainnet,
                true,
                black_box(123_456),
                black_box(&tip_hash),
            )
        })
    });
}

fn bench_progress(c: &mut Criterion) {
    let set = mainnet();
    let entry = IndexEntry {
        height: 60_000,
        hash: Hash256([0x42; 32]),
        timestamp: 1_395_000_000,
        chain_tx: 60_000,
    };
    let now = set.time_last_checkpoint() as i64 + 30 * 86_400;

    c.bench_function("guess_verification_progress", |b| {
        b.iter(|| guess_verification_progress_at(set, black_box(Some(&entry)), black_box(now)))
    });
}

fn bench_last_checkpoint(c: &mut Criterion) {
    let set = mainnet();

    // Worst case: only the lowest checkpoint is present, forcing a full
    // reverse scan of the table.
    let mut view = MemoryChainView::new();
    let (height, hash) = set.entries()[0];
    view.insert(IndexEntry {
        height,
        hash,
        timestamp: 1_390_000_000,
        chain_tx: height,
    });

    c.bench_function("last_checkpoint_full_scan", |b| {
        b.iter(|| last_checkpoint_with(black_box(set), black_box(&view)))
    });
}

criterion_group!(
    benches,
    bench_check_block,
    bench_progress,
    bench_last_checkpoint
);
criterion_main!(benches);

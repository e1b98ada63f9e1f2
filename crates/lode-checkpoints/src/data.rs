//! Per-network checkpoint datasets.
//!
//! Each [`CheckpointSet`] couples the hard-coded `(height, hash)` table with
//! the calibration scalars the progress estimator needs: when the last
//! checkpoint block was mined, how many transactions the chain contained at
//! that point, and the estimated transaction rate since. Sets are built once
//! on first use and never mutated.
//!
//! Candidate checkpoint blocks are chosen conservatively: deeply confirmed,
//! timestamped consistently with their neighbors, and verified against
//! several independent explorers before being added to a table.

use std::sync::LazyLock;

use lode_core::constants::NetworkKind;
use lode_core::error::CheckpointError;
use lode_core::types::Hash256;

/// How many times slower a post-checkpoint transaction is assumed to verify
/// compared to a pre-checkpoint one.
///
/// Blocks up to the last checkpoint are trust-anchored and replayed without
/// signature checks; blocks after it get full verification. The value is a
/// compromise across hardware: reindexing from fast disk on a slow CPU can
/// push the real ratio toward 20, while a fast multicore on a slow network
/// sits near 1.
pub const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

const MAINNET_TABLE: &[(u64, &str)] = &[
    (1, "5fdf4ec757ab6e29753b7f358a9d1fa246d7792b815171f9d8657de379b0fd07"),
    (2, "a038b3ed2c64e9ed79b4f56390f3a9e3510ba8788b549e0d47571001839abaf2"),
    (500, "3b20532e51b504931ef29134dacad478a0501e8b3cecb20a811df9e49612fa80"),
    (1000, "9d56296778574ba0b0e6c83af180c55dd12b335bc9677d8c06e3e0a0b4560444"),
    (5000, "2204f15655cb9a0328a71ce63187417e7cd5f2f0f6892a4ec9cf2692c7adfa4c"),
    (10000, "000a84c64c5d070493a0a9934958d3615248a4733d050411df4d8a7b04391837"),
    (15000, "79b575113ebce83eba5e67c9b6012fe1baef65daa2980b1ebb06aaf81ad26938"),
    (20000, "a886b750ff1ffa03def7a5cffe57c6dae0fccb4e52d1fc1b28953bd134eb002b"),
    (25000, "a5aea4aa98965005cf3bc0cdf7fdd810210d2eab3dd3c55c193e5673bfabb01a"),
    (30000, "4f266d69940bc71d88556c7f528eb19a2a997feecfe7cfa687d587671d997d41"),
    (35000, "da1affb55fe48d52c0dbda46ec920a453c2583219d6a7a3dc51ab02c0e92b8ac"),
    (40000, "d17cd741052f3dc2cf789deab98e252ebae6041e953dd6ba3fef025c9c847862"),
    (50000, "9b9b7d91b255759135d75f498160220d5b8d1332fd35084f456df45222950353"),
    (55000, "7f384822f59115a099a20efaeac96637e42e527a9a8b826ea29cef7b585d8700"),
    (60000, "016df74efefeeea55e3af5f48f36f9f0be61d4c68bcd89418575ead2d721e77e"),
    (65000, "0abf20a4f64aef5eeefef86742487698f7b37489115f1f819f001fd4393a5c4c"),
    (70000, "329458d6ec5fa7af6ed4c239d955cf27b49ecf0268e1b12f2eef8c205134f17d"),
    (75000, "ce1efb6baf2e51084f99b967c1e8bbf1f4f31beec86a58c58875906355804553"),
    (80000, "9f197690732518d7735b4553c3647aeffc995df402e7b6075e90f244ca997ff7"),
    (90000, "4b39d7ca068b0c8b69e11d518bfdf2d29f1c27cfdbc3d781fa22c56a0f92c829"),
    (95000, "7c558f594923a5a4ce374ecdb00f70e88145eea0151200032df90b39849d9ca4"),
    (100000, "e1099528345cc16363a6014f6f29c52e2b17db6dbbb79b126b1b6685a1785fbf"),
    (110000, "4b03b6bb9f5abe6341ea5e6be092432f7d80bdf9c99a10af9fa55708442304a8"),
    (120000, "e1596c0f13ec4d4b058ae4a4d95e6207bc7cf2943903d4d54c1c0da8d97e5886"),
];

const TESTNET_TABLE: &[(u64, &str)] = &[
    (546, "000000002a936ca763904c3c35fce2f3556c559c0214345d31b1bcebf76acb70"),
];

static MAINNET: LazyLock<CheckpointSet> = LazyLock::new(|| {
    CheckpointSet::from_table(
        MAINNET_TABLE,
        1_399_415_490, // time of the height-120000 checkpoint block
        120_000,       // cumulative transactions at that checkpoint
        8_000.0,       // estimated transactions/day since
    )
    .expect("mainnet checkpoint table is hardcoded valid data")
});

static TESTNET: LazyLock<CheckpointSet> = LazyLock::new(|| {
    CheckpointSet::from_table(TESTNET_TABLE, 1_369_685_559, 16_341, 300.0)
        .expect("testnet checkpoint table is hardcoded valid data")
});

/// The checkpoint dataset for one network.
///
/// Entries are held sorted by height, unique, and non-empty; the constructor
/// enforces all three so every downstream consumer can rely on them.
#[derive(Debug, Clone)]
pub struct CheckpointSet {
    /// `(height, hash)` pairs, heights strictly increasing.
    entries: Vec<(u64, Hash256)>,
    /// Unix timestamp of the highest checkpoint block.
    time_last_checkpoint: u64,
    /// Cumulative transaction count at the highest checkpoint.
    tx_count_last_checkpoint: u64,
    /// Estimated transactions per day after the highest checkpoint.
    tx_per_day: f64,
}

impl CheckpointSet {
    /// Build a set from a literal `(height, hex hash)` table plus the
    /// calibration scalars describing its highest checkpoint.
    ///
    /// # Errors
    ///
    /// - [`CheckpointError::EmptyTable`] for an empty table
    /// - [`CheckpointError::NonMonotonicHeight`] when heights are not
    ///   strictly increasing
    /// - [`CheckpointError::BadHash`] when a hash literal does not parse
    pub fn from_table(
        table: &[(u64, &str)],
        time_last_checkpoint: u64,
        tx_count_last_checkpoint: u64,
        tx_per_day: f64,
    ) -> Result<Self, CheckpointError> {
        if table.is_empty() {
            return Err(CheckpointError::EmptyTable);
        }

        let mut entries = Vec::with_capacity(table.len());
        for (index, &(height, hex)) in table.iter().enumerate() {
            if let Some(&(prev, _)) = entries.last() {
                if height <= prev {
                    return Err(CheckpointError::NonMonotonicHeight { index });
                }
            }
            let hash = Hash256::from_hex(hex)
                .map_err(|source| CheckpointError::BadHash { height, source })?;
            entries.push((height, hash));
        }

        Ok(Self {
            entries,
            time_last_checkpoint,
            tx_count_last_checkpoint,
            tx_per_day,
        })
    }

    /// The expected block hash at `height`, if `height` is checkpointed.
    pub fn hash_at(&self, height: u64) -> Option<&Hash256> {
        self.entries
            .binary_search_by_key(&height, |&(h, _)| h)
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Height of the highest checkpoint.
    pub fn max_height(&self) -> u64 {
        self.entries.last().map(|&(h, _)| h).unwrap_or(0)
    }

    /// All checkpoints, sorted by ascending height.
    pub fn entries(&self) -> &[(u64, Hash256)] {
        &self.entries
    }

    /// Number of checkpoints in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no checkpoints. Always false for a constructed
    /// set; present for completeness alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unix timestamp of the highest checkpoint block.
    pub fn time_last_checkpoint(&self) -> u64 {
        self.time_last_checkpoint
    }

    /// Cumulative transaction count at the highest checkpoint.
    pub fn tx_count_last_checkpoint(&self) -> u64 {
        self.tx_count_last_checkpoint
    }

    /// Estimated transactions per day after the highest checkpoint.
    pub fn tx_per_day(&self) -> f64 {
        self.tx_per_day
    }
}

/// The pre-built checkpoint dataset for the given network.
pub fn active_set(network: NetworkKind) -> &'static CheckpointSet {
    match network {
        NetworkKind::Mainnet => &MAINNET,
        NetworkKind::Testnet => &TESTNET,
    }
}

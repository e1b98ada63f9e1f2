//! Block index capability interface and in-memory implementation.
//!
//! The block index is owned, persisted, and locked by the node layer; this
//! subsystem only performs point lookups against it. [`ChainView`] exposes
//! exactly that capability, and [`MemoryChainView`] is the HashMap-backed
//! implementation used in tests. The caller must hold whatever guard
//! protects the real index for the duration of a lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::Hash256;

/// A read-only snapshot of one block index entry.
///
/// `chain_tx` is the cumulative transaction count from genesis up to and
/// including this block; the progress estimator keys its cost model on it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Block height.
    pub height: u64,
    /// Block header hash.
    pub hash: Hash256,
    /// Block timestamp, Unix seconds.
    pub timestamp: u64,
    /// Cumulative transactions from genesis through this block.
    pub chain_tx: u64,
}

/// Hash-keyed, read-only view of the node's block index.
///
/// Implemented by the node layer over its index structure. This subsystem
/// never mutates or iterates the index; the single point-lookup method is
/// the whole contract. A lookup that fails inside a storage-backed
/// implementation should surface as `None`; checkpoint consumers treat
/// absence permissively.
pub trait ChainView: Send + Sync {
    /// Look up the index entry for a block hash. Returns `None` if the
    /// block is not in the index.
    fn node_by_hash(&self, hash: &Hash256) -> Option<IndexEntry>;
}

/// In-memory block index view for tests.
#[derive(Debug, Default)]
pub struct MemoryChainView {
    entries: HashMap<Hash256, IndexEntry>,
}

impl MemoryChainView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keyed by its own hash. Replaces any previous entry
    /// with the same hash.
    pub fn insert(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.hash, entry);
    }

    /// Number of entries in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ChainView for MemoryChainView {
    fn node_by_hash(&self, hash: &Hash256) -> Option<IndexEntry> {
        self.entries.get(hash).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(height: u64, hash_byte: u8) -> IndexEntry {
        IndexEntry {
            height,
            hash: Hash256([hash_byte; 32]),
            timestamp: 1_400_000_000 + height * 60,
            chain_tx: height * 2,
        }
    }

    // --- MemoryChainView ---

    #[test]
    fn empty_view_has_no_entries() {
        let view = MemoryChainView::new();
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.node_by_hash(&Hash256([1; 32])), None);
    }

    #[test]
    fn lookup_finds_inserted_entry() {
        let mut view = MemoryChainView::new();
        let e = entry(500, 0xAA);
        view.insert(e);

        assert_eq!(view.len(), 1);
        assert_eq!(view.node_by_hash(&Hash256([0xAA; 32])), Some(e));
    }

    #[test]
    fn lookup_misses_unknown_hash() {
        let mut view = MemoryChainView::new();
        view.insert(entry(500, 0xAA));
        assert_eq!(view.node_by_hash(&Hash256([0xBB; 32])), None);
    }

    #[test]
    fn insert_replaces_same_hash() {
        let mut view = MemoryChainView::new();
        view.insert(entry(500, 0xAA));
        let mut updated = entry(500, 0xAA);
        updated.chain_tx = 9_999;
        view.insert(updated);

        assert_eq!(view.len(), 1);
        assert_eq!(
            view.node_by_hash(&Hash256([0xAA; 32])).unwrap().chain_tx,
            9_999
        );
    }

    // --- Object safety ---

    #[test]
    fn view_usable_as_dyn() {
        let mut view = MemoryChainView::new();
        view.insert(entry(1000, 0xCC));
        let dyn_view: &dyn ChainView = &view;
        assert_eq!(
            dyn_view.node_by_hash(&Hash256([0xCC; 32])).unwrap().height,
            1000
        );
    }
}

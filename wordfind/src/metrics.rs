use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Tracks traversal work for one search invocation
#[derive(Debug, Clone, Default)]
pub struct SearchMetrics {
    starts_explored: Arc<AtomicU64>,
    cells_expanded: Arc<AtomicU64>,
    branches_pruned: Arc<AtomicU64>,
    words_found: Arc<AtomicU64>,
    duplicates_suppressed: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new starting cell being explored
    pub fn record_start_explored(&self) {
        self.starts_explored.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a cell visit during traversal
    pub fn record_cell_expanded(&self) {
        self.cells_expanded.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a branch abandoned because its path is no dictionary prefix
    pub fn record_branch_pruned(&self) {
        self.branches_pruned.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a newly found word
    pub fn record_word_found(&self) {
        self.words_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a word that was found again through a different path
    pub fn record_duplicate_suppressed(&self) {
        self.duplicates_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the current traversal statistics
    pub fn snapshot(&self) -> SearchStats {
        SearchStats {
            starts_explored: self.starts_explored.load(Ordering::Relaxed),
            cells_expanded: self.cells_expanded.load(Ordering::Relaxed),
            branches_pruned: self.branches_pruned.load(Ordering::Relaxed),
            words_found: self.words_found.load(Ordering::Relaxed),
            duplicates_suppressed: self.duplicates_suppressed.load(Ordering::Relaxed),
        }
    }

    /// Logs the current statistics
    pub fn log_stats(&self) {
        let stats = self.snapshot();
        info!(
            "Traversal stats: {} starts, {} cells expanded, {} branches pruned",
            stats.starts_explored, stats.cells_expanded, stats.branches_pruned
        );
        debug!(
            "Result stats: {} words found, {} duplicates suppressed",
            stats.words_found, stats.duplicates_suppressed
        );
    }
}

/// Point-in-time view of the traversal counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub starts_explored: u64,
    pub cells_expanded: u64,
    pub branches_pruned: u64,
    pub words_found: u64,
    pub duplicates_suppressed: u64,
}

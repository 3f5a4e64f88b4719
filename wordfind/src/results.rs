use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

use crate::metrics::SearchStats;

/// The outcome of one search invocation: the found-word set plus traversal
/// statistics and elapsed time.
///
/// Words are stored in the canonical uppercase form, so set membership is
/// case-insensitive by construction. The ordered set keeps output
/// deterministic for display and regression tests; the contract itself is
/// order-independent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    /// All dictionary words embedded in the board
    pub words: BTreeSet<String>,
    /// Traversal counters for this invocation
    pub stats: SearchStats,
    /// Wall-clock duration of the traversal
    pub elapsed: Duration,
}

impl SearchReport {
    /// Creates a new empty report
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of unique words found
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(words: &[&str]) -> SearchReport {
        SearchReport {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_report_is_empty() {
        let report = SearchReport::new();
        assert!(report.is_empty());
        assert_eq!(report.word_count(), 0);
        assert_eq!(report.stats, SearchStats::default());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let report = report_with(&["CHOCOLATE", "HOOT"]);
        assert!(report.contains("chocolate"));
        assert!(report.contains("Hoot"));
        assert!(report.contains("HOOT"));
        assert!(!report.contains("car"));
    }

    #[test]
    fn test_word_count() {
        let report = report_with(&["HOT", "HOOT", "TOO"]);
        assert_eq!(report.word_count(), 3);
        assert!(!report.is_empty());
    }
}

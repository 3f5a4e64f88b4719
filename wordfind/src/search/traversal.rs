//! Recursive backtracking traversal of the board.
//!
//! From every starting cell a depth-first walk extends the accumulated path
//! into all eight neighboring directions, never reusing a cell within one
//! path. The walk descends only while the path is still a prefix of some
//! dictionary word; recursion depth is therefore bounded by the longest
//! inserted word.

use std::collections::BTreeSet;
use tracing::trace;

use crate::board::Board;
use crate::dictionary::{Trie, MIN_WORD_LENGTH};
use crate::metrics::SearchMetrics;

/// The eight neighbor offsets as (row, column) deltas.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (-1, -1),
    (1, -1),
    (1, 1),
];

/// Per-invocation traversal state: the visited overlay, the accumulating
/// path, and the result set. Created fresh for every search and never
/// shared.
struct SearchState {
    width: usize,
    visited: Vec<bool>,
    path: String,
    found: BTreeSet<String>,
}

impl SearchState {
    fn new(board: &Board) -> Self {
        Self {
            width: board.width(),
            visited: vec![false; board.width() * board.height()],
            path: String::new(),
            found: BTreeSet::new(),
        }
    }

    fn is_visited(&self, row: usize, col: usize) -> bool {
        self.visited[row * self.width + col]
    }

    fn mark(&mut self, row: usize, col: usize) {
        self.visited[row * self.width + col] = true;
    }

    fn unmark(&mut self, row: usize, col: usize) {
        self.visited[row * self.width + col] = false;
    }
}

/// Enumerates every dictionary word embedded in the board as a connected
/// eight-directional path with no cell reused.
pub fn find_words(board: &Board, dictionary: &Trie) -> BTreeSet<String> {
    find_words_instrumented(board, dictionary, &SearchMetrics::new())
}

/// Same as [`find_words`], recording traversal work into `metrics`.
pub(crate) fn find_words_instrumented(
    board: &Board,
    dictionary: &Trie,
    metrics: &SearchMetrics,
) -> BTreeSet<String> {
    let mut state = SearchState::new(board);

    // One visited overlay serves every start: cells are unmarked on
    // backtrack, so the grid is clean again when the next start begins.
    for row in 0..board.height() {
        for col in 0..board.width() {
            metrics.record_start_explored();
            descend(board, dictionary, row, col, &mut state, metrics);
        }
    }

    state.found
}

/// Visits `(row, col)`, which the caller guarantees is in bounds and not yet
/// on the current path. The visited mark and path letter bracket exactly
/// this call, so sibling directions always see a clean state.
fn descend(
    board: &Board,
    dictionary: &Trie,
    row: usize,
    col: usize,
    state: &mut SearchState,
    metrics: &SearchMetrics,
) {
    state.mark(row, col);
    state.path.push(board.at(row, col));
    metrics.record_cell_expanded();

    if state.path.len() >= MIN_WORD_LENGTH && dictionary.exists(&state.path) {
        if state.found.insert(state.path.clone()) {
            metrics.record_word_found();
            trace!("Found {}", state.path);
        } else {
            metrics.record_duplicate_suppressed();
        }
    }

    // Prefix viability is checked on the current path before recursing; a
    // recorded match still descends, since a longer word may extend it.
    if dictionary.starts_with(&state.path) {
        for (row_delta, col_delta) in DIRECTIONS {
            if let Some((next_row, next_col)) = board.neighbor(row, col, row_delta, col_delta) {
                if !state.is_visited(next_row, next_col) {
                    descend(board, dictionary, next_row, next_col, state, metrics);
                }
            }
        }
    } else {
        metrics.record_branch_pruned();
    }

    state.path.pop();
    state.unmark(row, col);
}

//! Search setup and orchestration.

use std::time::Instant;
use tracing::{debug, info};

use super::traversal;
use crate::board::Board;
use crate::config::SearchConfig;
use crate::dictionary::{Trie, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::errors::{WordFindError, WordFindResult};
use crate::metrics::SearchMetrics;
use crate::results::SearchReport;
use crate::wordlist::read_word_list;

/// Staged word search: supply a word source and a board state, then ask for
/// the found words.
///
/// The dictionary and board are built once and immutable afterwards; every
/// [`WordSearch::found_words`] call runs with fresh traversal state, so
/// repeated calls yield identical result sets.
#[derive(Debug, Default)]
pub struct WordSearch {
    dictionary: Option<Trie>,
    board: Option<Board>,
}

impl WordSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests the raw vocabulary: words are trimmed, length-filtered, and
    /// uppercased before insertion into the dictionary index.
    ///
    /// Fails with [`WordFindError::InvalidInput`] when the source yields no
    /// words at all. Words outside the accepted length range are skipped,
    /// not errors.
    pub fn set_word_source<I, S>(&mut self, words: I) -> WordFindResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        let mut supplied = 0usize;
        let mut skipped = 0usize;

        for word in words {
            supplied += 1;
            let word = word.as_ref().trim();
            let length = word.chars().count();
            if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
                skipped += 1;
                continue;
            }
            trie.insert(&word.to_ascii_uppercase());
        }

        if supplied == 0 {
            return Err(WordFindError::invalid_input("word source is empty"));
        }

        debug!(
            "Dictionary ready: {} distinct words, {} of {} supplied words skipped",
            trie.len(),
            skipped,
            supplied
        );
        self.dictionary = Some(trie);
        Ok(())
    }

    /// Validates and installs the board state from row strings
    pub fn set_board_state<S: AsRef<str>>(
        &mut self,
        width: usize,
        height: usize,
        rows: &[S],
    ) -> WordFindResult<()> {
        self.board = Some(Board::build(width, height, rows)?);
        Ok(())
    }

    /// Installs an already-built board
    pub fn set_board(&mut self, board: Board) {
        self.board = Some(board);
    }

    pub fn dictionary(&self) -> Option<&Trie> {
        self.dictionary.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Runs the search and returns every dictionary word embedded in the
    /// board.
    ///
    /// Fails with [`WordFindError::NotInitialized`] when either the word
    /// source or the board state has not been set.
    pub fn found_words(&self) -> WordFindResult<SearchReport> {
        let dictionary = self
            .dictionary
            .as_ref()
            .ok_or(WordFindError::NotInitialized("word source has not been set"))?;
        let board = self
            .board
            .as_ref()
            .ok_or(WordFindError::NotInitialized("board state has not been set"))?;

        info!(
            "Searching {}x{} board against {} dictionary words",
            board.width(),
            board.height(),
            dictionary.len()
        );

        let metrics = SearchMetrics::new();
        let started = Instant::now();
        let words = traversal::find_words_instrumented(board, dictionary, &metrics);
        let elapsed = started.elapsed();
        metrics.log_stats();

        info!("Search complete: {} unique words in {:?}", words.len(), elapsed);

        Ok(SearchReport {
            words,
            stats: metrics.snapshot(),
            elapsed,
        })
    }
}

/// Runs a complete search from configuration: loads the word list file,
/// builds the board from the flat contents string, and returns the report.
pub fn run(config: &SearchConfig) -> WordFindResult<SearchReport> {
    info!(
        "Loading word list from {}",
        config.dictionary_path.display()
    );
    let words = read_word_list(&config.dictionary_path)?;

    let mut search = WordSearch::new();
    search.set_word_source(&words)?;
    search.set_board(Board::from_contents(
        config.width,
        config.height,
        &config.contents,
    )?);

    search.found_words()
}

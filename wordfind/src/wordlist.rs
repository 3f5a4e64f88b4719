//! Word list file loading.

use std::path::Path;
use tracing::debug;

use crate::errors::{WordFindError, WordFindResult};

/// Reads a word list file, one word per line. Lines are trimmed and empty
/// lines dropped; length filtering and case normalization happen at the
/// dictionary ingestion boundary.
pub fn read_word_list(path: &Path) -> WordFindResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => WordFindError::file_not_found(path),
        _ => WordFindError::IoError(e),
    })?;

    let words: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_word_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "hot\n  car  \n\ncare\n").unwrap();

        let words = read_word_list(&path).unwrap();
        assert_eq!(words, vec!["hot", "car", "care"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = read_word_list(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, WordFindError::FileNotFound(_)));
    }

    #[test]
    fn test_empty_file_yields_no_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::File::create(&path).unwrap();

        let words = read_word_list(&path).unwrap();
        assert!(words.is_empty());
    }
}

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{tempdir, TempDir};

fn write_word_list(words: &[&str]) -> Result<(TempDir, std::path::PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path)?;
    for word in words {
        writeln!(file, "{word}")?;
    }
    Ok((dir, path))
}

#[test]
fn test_finds_words_on_small_board() -> Result<()> {
    let (_dir, dictionary) = write_word_list(&[
        "hot",
        "car",
        "care",
        "hoot",
        "ace",
        "to",
        "too",
        "chocolate",
        "chocolates",
    ])?;

    Command::cargo_bin("wordfind-cli")?
        .args(["--width", "3", "--height", "3", "--contents", "cholocate"])
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CHOCOLATE")
                .and(predicate::str::contains("HOOT"))
                .and(predicate::str::contains("HOT"))
                .and(predicate::str::contains("TOO"))
                .and(predicate::str::contains("4 words")),
        );
    Ok(())
}

#[test]
fn test_stats_only_hides_words() -> Result<()> {
    let (_dir, dictionary) = write_word_list(&["hot", "hoot", "too"])?;

    Command::cargo_bin("wordfind-cli")?
        .args(["--contents", "cholocate", "--stats"])
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("HOOT")
                .not()
                .and(predicate::str::contains("3 words"))
                .and(predicate::str::contains("9 starts")),
        );
    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let (_dir, dictionary) = write_word_list(&["hot", "hoot"])?;

    let assert = Command::cargo_bin("wordfind-cli")?
        .args(["--contents", "cholocate", "--json"])
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let report: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(report["words"], serde_json::json!(["HOOT", "HOT"]));
    assert_eq!(report["stats"]["starts_explored"], 9);
    Ok(())
}

#[test]
fn test_contents_length_mismatch_fails() -> Result<()> {
    let (_dir, dictionary) = write_word_list(&["hot"])?;

    Command::cargo_bin("wordfind-cli")?
        .args(["--width", "3", "--height", "3", "--contents", "chol"])
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed board contents"));
    Ok(())
}

#[test]
fn test_missing_dictionary_fails() -> Result<()> {
    let dir = tempdir()?;

    Command::cargo_bin("wordfind-cli")?
        .args(["--contents", "cholocate"])
        .arg("--dictionary")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Word list not found"));
    Ok(())
}

#[test]
fn test_non_letter_contents_fails() -> Result<()> {
    let (_dir, dictionary) = write_word_list(&["hot"])?;

    Command::cargo_bin("wordfind-cli")?
        .args(["--contents", "choloc4te"])
        .arg("--dictionary")
        .arg(&dictionary)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed board contents"));
    Ok(())
}

//! End-to-end tests over a real dataset directory.
//!
//! Builds a small nested dataset in a temp directory, indexes it through
//! the directory corpus and checks both the library API and the CLI.

use autocomplete::index::{DirectoryCorpus, DirectoryOptions, IndexConfig};
use autocomplete::query::CompletionCoordinator;
use autocomplete::index::AutoCompleteData;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create the test dataset
fn create_dataset() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    fs::create_dir_all(root.join("subfolder1")).unwrap();
    fs::create_dir_all(root.join("subfolder2")).unwrap();

    fs::write(
        root.join("subfolder1").join("file1.txt"),
        "How to learn Python?\nhow to sew\nlearn to cook\n",
    )
    .unwrap();
    fs::write(
        root.join("subfolder2").join("file2.txt"),
        "test content\nnext line\nanother test\n",
    )
    .unwrap();
    fs::write(root.join("file5.txt"), "test content\r\nthe quick brown fox\r\n").unwrap();
    fs::write(root.join("image.png"), [0u8, 1, 2, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    fs::write(root.join("notes.log"), "test content from a log\n").unwrap();

    dir
}

fn coordinator(root: &Path, exclude: &[&str]) -> CompletionCoordinator<DirectoryCorpus> {
    let options = DirectoryOptions {
        exclude: exclude.iter().map(|s| s.to_string()).collect(),
        ..DirectoryOptions::default()
    };
    let corpus = DirectoryCorpus::open(root, options).unwrap();
    CompletionCoordinator::build(corpus, IndexConfig::default()).unwrap()
}

fn relative(root: &Path, suggestion: &AutoCompleteData) -> (PathBuf, u32) {
    let path = PathBuf::from(&suggestion.source_text);
    (path.strip_prefix(root).unwrap().to_path_buf(), suggestion.offset)
}

#[test]
fn test_build_skips_binary_and_excluded_files() {
    let dir = create_dataset();
    let c = coordinator(dir.path(), &["*.log"]);

    let report = c.report();
    assert_eq!(report.files, 3);
    assert_eq!(report.lines, 8);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_suggestions_across_files() {
    let dir = create_dataset();
    let root = dir.path();
    let c = coordinator(root, &["*.log"]);

    let found: HashSet<_> = c
        .get_suggestions("test content")
        .iter()
        .map(|s| relative(root, s))
        .collect();

    let expected: HashSet<_> = [
        (PathBuf::from("file5.txt"), 1),
        (Path::new("subfolder2").join("file2.txt"), 1),
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_excluded_file_is_not_indexed() {
    let dir = create_dataset();
    let c = coordinator(dir.path(), &[]);
    assert_eq!(c.report().files, 4);
    assert_eq!(c.get_suggestions("test content").len(), 3);
}

#[test]
fn test_typo_completion_from_disk() {
    let dir = create_dataset();
    let root = dir.path();
    let c = coordinator(root, &["*.log"]);

    let suggestions = c.get_suggestions("how to lern");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].completed_sentence, "How to learn Python?");
    assert_eq!(
        relative(root, &suggestions[0]),
        (Path::new("subfolder1").join("file1.txt"), 1)
    );
}

#[test]
fn test_crlf_lines_complete_mid_sentence() {
    let dir = create_dataset();
    let c = coordinator(dir.path(), &["*.log"]);

    let suggestions = c.get_suggestions("quick brown");
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].completed_sentence, "quick brown fox");
    assert_eq!(suggestions[0].score, 22);
}

#[test]
fn test_line_lookup_sees_current_file_contents() {
    let dir = create_dataset();
    let root = dir.path();
    let c = coordinator(root, &["*.log"]);

    // First query warms the line cache
    let before = c.get_suggestions("the quick");
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].completed_sentence, "the quick brown fox");

    // A changed line no longer matches, cached or not
    fs::write(root.join("file5.txt"), "something else\nentirely different\n").unwrap();
    assert!(c.get_suggestions("the quick").is_empty());
}

#[test]
fn test_cli_query_json() {
    let dir = create_dataset();
    let root = dir.path();
    let config = root.join("no-such-config.json");

    let output = Command::new(env!("CARGO_BIN_EXE_autocomplete"))
        .args(["--config", config.to_str().unwrap(), "--no-color"])
        .args(["query", "--json", "--path", root.to_str().unwrap(), "how", "to", "sew"])
        .output()
        .expect("Failed to run autocomplete");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let suggestions: Vec<AutoCompleteData> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].completed_sentence, "how to sew");
    assert_eq!(suggestions[0].offset, 2);
    assert_eq!(suggestions[0].score, 20);
}

#[test]
fn test_cli_missing_dataset_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("no-such-config.json");
    let missing = dir.path().join("missing");

    let output = Command::new(env!("CARGO_BIN_EXE_autocomplete"))
        .args(["--config", config.to_str().unwrap()])
        .args(["query", "--path", missing.to_str().unwrap(), "anything"])
        .output()
        .expect("Failed to run autocomplete");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Dataset directory not found"));
}

/*!
 * Common test utilities for the mkvembed test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample metadata file for testing
pub fn create_test_metadata(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"; Sample metadata for testing
SUBTITLELOCALE en_US

CHAPTER 0:00 Opening
CHAPTER 1:30.5 Act One
CHAPTER 1:02:03.5 Finale

SUBTITLE 0:05 0:09 First line of dialogue
SUBTITLE 1:31 1:34.25 Two lines\nof dialogue
"#;
    create_test_file(dir, filename, content)
}

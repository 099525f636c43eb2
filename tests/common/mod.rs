/*!
 * Common test utilities for the subtrans test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

use subtrans::subtitle_processor::{Cue, SubtitleDocument};

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

/// A small well-formed SRT document used across tests
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Builds an in-memory document with `count` short cues
pub fn sample_document(count: usize) -> SubtitleDocument {
    let cues = (0..count)
        .map(|i| {
            Cue::new(
                i + 1,
                (i as u64) * 3000,
                (i as u64) * 3000 + 2500,
                format!("Cue number {}", i + 1),
            )
        })
        .collect();
    SubtitleDocument::from_cues(cues)
}

/// Owned string batch from literals
pub fn batch(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

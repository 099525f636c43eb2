use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and path utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    /// Read a file into memory as raw bytes
    pub fn read_to_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
        let path = path.as_ref();
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write bytes to a file, creating parent directories if needed
    pub fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }
        fs::write(path, bytes)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    /// Normalize a language display name into a filename tag
    ///
    /// "Yoruba" becomes "yoruba", "Brazilian Portuguese" becomes
    /// "brazilian-portuguese".
    pub fn sanitize_language_tag(language: &str) -> String {
        language
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    // @generates: Output path for translated subtitle, next to the input
    // @params: input_file, target_language
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, target_language: &str) -> PathBuf {
        let input_file = input_file.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        // Create the output filename with language tag and extension
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('.');
        output_filename.push_str(&Self::sanitize_language_tag(target_language));
        output_filename.push_str(".srt");

        match input_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(output_filename),
            _ => PathBuf::from(output_filename),
        }
    }
}

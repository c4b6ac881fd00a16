//! Metadata about the file a document was parsed from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Metadata about the source samplesheet file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of sections found.
    pub section_count: usize,
}

impl SourceInfo {
    /// Create metadata for a file that has been parsed.
    pub fn new(path: PathBuf, hash: String, size_bytes: u64, section_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            section_count,
        }
    }

    /// File name without its extension, used to name report files.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "samplesheet".to_string())
    }
}

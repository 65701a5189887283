//! Service Layer Error Types
//!
//! Errors for the file conversion boundary. Every fault during the
//! read/parse/transform phase aborts the whole operation before anything is
//! written; write faults surface after serialization succeeded.

use std::path::Path;

use thiserror::Error;

use crate::operations::TreeBuildError;

/// Errors that can occur while converting a flat node file into a tree file.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source file missing or unreadable
    #[error("Failed to read source file '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not a valid JSON array
    #[error("Malformed JSON in source file '{path}': {source}")]
    MalformedJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// One record in the source array violates the node schema
    ///
    /// Records are validated individually so the error names the offending
    /// array index instead of failing on the whole document.
    #[error("Invalid node record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// Tree reconstruction failed on a data integrity fault
    #[error("Tree reconstruction failed: {0}")]
    TreeBuild(#[from] TreeBuildError),

    /// The assembled tree could not be serialized
    #[error("Failed to serialize output tree: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Destination file could not be written
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Create a SourceRead error
    pub fn source_read(path: &Path, source: std::io::Error) -> Self {
        Self::SourceRead {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a MalformedJson error
    pub fn malformed_json(path: &Path, source: serde_json::Error) -> Self {
        Self::MalformedJson {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an InvalidRecord error
    pub fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Create an OutputWrite error
    pub fn output_write(path: &Path, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.display().to_string(),
            source,
        }
    }
}

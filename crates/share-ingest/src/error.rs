//! Error types for template ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating or reading templates.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Template file not found.
    #[error("template not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Workbook Errors ===
    /// The file could not be opened as a spreadsheet.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// A sheet of an opened workbook could not be read.
    #[error("failed to read sheet '{sheet}' of {path}: {source}")]
    SheetRead {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

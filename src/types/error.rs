//! Error types for the sales consolidator
//!
//! This module defines the fatal errors that stop a run. Recoverable problems
//! are [`Diagnostic`]s; one only becomes a [`ReportError`] when the
//! diagnostics policy runs in strict mode.
//!
//! # Error Categories
//!
//! - **Policy aborts**: a diagnostic raised while running in strict mode
//! - **Empty master data**: a master file produced no valid record
//! - **File I/O Errors**: file not found, permission denied, etc.

use super::diagnostic::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Main error type for the sales consolidator
///
/// Every variant is fatal: the run stops and no report is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// A validation diagnostic raised in strict mode
    #[error("strict mode abort: {0}")]
    StrictModeAbort(Diagnostic),

    /// A master file yielded zero valid records
    ///
    /// Fatal in both modes: nothing downstream can be computed.
    #[error("no valid records loaded from {file}")]
    EmptyMasterData {
        /// Name of the master file
        file: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File or directory involved
        path: String,
        /// Description of the underlying failure
        message: String,
    },
}

impl ReportError {
    /// Create an EmptyMasterData error
    pub fn empty_master_data(file: &str) -> Self {
        ReportError::EmptyMasterData {
            file: file.to_string(),
        }
    }

    /// Create an Io error from any displayable cause
    pub fn io(path: &Path, cause: impl std::fmt::Display) -> Self {
        ReportError::Io {
            path: path.display().to_string(),
            message: cause.to_string(),
        }
    }

    /// Map an `std::io::Error`, turning `NotFound` into [`ReportError::FileNotFound`]
    pub fn from_io(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            ReportError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ReportError::io(path, error)
        }
    }
}

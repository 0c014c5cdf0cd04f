//! Error types shared by the codecs and the CLI.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing protein collections.
#[derive(Error, Debug)]
pub enum ProteinError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Project {0} not found")]
    NotFound(i32),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, ProteinError>;

/// A single field of a tab-delimited line that could not be parsed.
///
/// Only ever seen by the decoder, which logs it and skips the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid {field} in column {index}: '{value}'")]
    Invalid {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("missing {field} (column {index})")]
    Missing { index: usize, field: &'static str },
}

impl FieldError {
    /// Zero-based column index.
    pub fn index(&self) -> usize {
        match self {
            FieldError::Invalid { index, .. } | FieldError::Missing { index, .. } => *index,
        }
    }

    /// Name of the record field the column maps to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Invalid { field, .. } | FieldError::Missing { field, .. } => *field,
        }
    }
}

//! # Report Port
//!
//! Trait for presenting a diff.
//!
//! Two presentations exist:
//! - `tree` - the whole merged value
//! - `rows` - one line per divergence
//!
//! Implemented by output adapters (text, ...)

use crate::core::{Diff, DiffRow};

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while reporting
#[derive(Debug)]
pub enum ReportError {
    /// Writing to the sink failed
    Io(std::io::Error),

    /// The diff could not be encoded
    Encode(String),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "Report IO error: {}", e),
            ReportError::Encode(msg) => write!(f, "Report encoding error: {}", msg),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Encode(_) => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::Io(e)
    }
}

/// Trait for presenting diffs
pub trait Report {
    /// Present the whole merged value
    fn tree(&mut self, diff: &Diff) -> ReportResult<()>;

    /// Present one entry per divergence, in the given order
    fn rows(&mut self, rows: &[DiffRow]) -> ReportResult<()>;
}

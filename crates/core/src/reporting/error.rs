//! Reporting error types.

use thiserror::Error;

/// Errors that can occur during report derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportingError {
    /// Requested year has no yearly bucket at all.
    ///
    /// Zero denominators inside ratio math are NOT this error; they resolve
    /// to zero.
    #[error("Year not found: {0}")]
    YearNotFound(i32),
}

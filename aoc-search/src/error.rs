//! Error types for the search toolkit

use thiserror::Error;

/// Errors raised by the search toolkit
///
/// A search that legitimately finds nothing is not an error: those routines
/// return `Ok(None)` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Input structure is malformed (ragged grid, endpoint off the grid or on a blocked cell, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The register machine hit something it cannot execute
    #[error("Invalid program at ip {ip}: {reason}")]
    InvalidProgram {
        /// Instruction pointer of the offending instruction
        ip: usize,
        /// What was wrong with it
        reason: String,
    },

    /// A count no longer fits in 64 bits
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

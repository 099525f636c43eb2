/*!
 * Error types for the subtrans application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised by translation oracle implementations
#[derive(Error, Debug)]
pub enum OracleError {
    /// The oracle could not be reached or refused to answer (network failure,
    /// rate limit, non-success status, external timeout)
    #[error("oracle unavailable: {0}")]
    Unavailable(String),

    /// The oracle answered but the response could not be decoded, or it
    /// violated the count-preservation contract
    #[error("oracle returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors that can fail a translation run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input could not be parsed as a subtitle document
    #[error("malformed subtitle document: {0}")]
    MalformedDocument(String),

    /// A tunable was rejected before any oracle call was made
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An oracle call failed; the run aborts at this batch
    #[error("oracle call failed on batch {batch_index}: {source}")]
    Oracle {
        /// Zero-based index of the batch that failed
        batch_index: usize,
        /// The underlying oracle failure
        #[source]
        source: OracleError,
    },

    /// The flattened translated-text count disagrees with the cue count.
    /// A misaligned subtitle file is worse than no file, so no output is
    /// produced.
    #[error("translated text count mismatch: expected {expected} cues, got {actual}")]
    AlignmentMismatch {
        /// Number of cues in the source document
        expected: usize,
        /// Number of translated texts the oracle produced in total
        actual: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a translation run
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

//! Error types for the Lode checkpoint subsystem.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashParseError {
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("invalid length: {0} bytes, expected 32")] InvalidLength(usize),
}

/// Failures constructing a checkpoint dataset from a literal table.
///
/// The shipped tables are validated by construction; these variants exist so
/// that table validation stays unit-testable rather than panicking mid-parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("empty checkpoint table")] EmptyTable,
    #[error("checkpoint heights not strictly increasing at index {index}")]
    NonMonotonicHeight { index: usize },
    #[error("bad checkpoint hash at height {height}: {source}")]
    BadHash { height: u64, source: HashParseError },
}

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

/// Bad input from the caller. Always detected before any output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Rule must be within 0..=255, got {0}")]
    RuleOutOfRange(i64),

    #[error("Expected a decimal rule number, got \"{0}\"")]
    NotANumber(String),

    #[error("Neighborhood index must be within 0..=7, got {0}")]
    NeighborhoodOutOfRange(u8),

    #[error("Steps must be non-negative, got {0}")]
    NegativeSteps(i64),

    #[error("{0} steps would not fit in memory")]
    TooManySteps(u64),
}

/// An internal defect. Unreachable when rows and tables are built through this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Cell symbol must be '0' or '1', got '{0}'")]
    InvalidSymbol(char),

    #[error("Transition table has no entry for neighborhood {0:03b}")]
    MissingNeighborhood(u8),
}

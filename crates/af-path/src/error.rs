//! Path-subsystem error type.

use thiserror::Error;

/// Errors produced by `af-path`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("no path from {start:?} to {end:?}")]
    NoPath { start: String, end: String },

    #[error("path enumeration exceeded the limit of {limit} paths")]
    TooManyPaths { limit: usize },

    #[error("path selection exceeded the budget of {budget} search steps")]
    SelectionBudgetExceeded { budget: u64 },

    #[error("paths {first} and {second} share interior rooms")]
    Overlap { first: usize, second: usize },
}

pub type PathResult<T> = Result<T, PathError>;

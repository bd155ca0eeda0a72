//! Core error type.
//!
//! Sub-crates define their own error enums; this one only covers what
//! `af-core` itself can reject: configuration and id overflow.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{kind} index {index} is out of range")]
    IdOutOfRange { kind: &'static str, index: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;

use af_core::{CoreError, Turn};
use af_path::PathError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("cannot schedule without at least one path")]
    NoPaths,

    #[error("cannot schedule zero agents")]
    NoAgents,

    /// A turn produced no moves while agents were still en route.  Disjoint
    /// paths with in-order assignment make this unreachable; seeing it means
    /// a selector or assignment bug.
    #[error("scheduling deadlock at {turn}: {remaining} agents cannot move")]
    Deadlock { turn: Turn, remaining: usize },

    #[error("schedule did not finish within {limit} turns")]
    TurnLimit { limit: u64 },
}

pub type SimResult<T> = Result<T, SimError>;

/// Any failure of the end-to-end [`solve`](crate::solve) pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

//! The `TurnWriter` trait implemented by all backends.

use af_core::Turn;
use af_graph::Graph;
use af_sched::Move;

use crate::OutputResult;

/// Sink for a schedule, one turn at a time.
///
/// Errors are stored by [`TurnOutputObserver`](crate::TurnOutputObserver)
/// and retrieved with `take_error` after the run.
pub trait TurnWriter {
    /// Write the moves of one turn.  `moves` may be empty; backends skip
    /// empty turns.
    fn write_turn(&mut self, graph: &Graph, turn: Turn, moves: &[Move]) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

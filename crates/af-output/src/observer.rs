//! `TurnOutputObserver<W>`: bridges `TurnObserver` to a `TurnWriter`.

use af_core::Turn;
use af_graph::Graph;
use af_sched::{Move, TurnObserver};

use crate::writer::TurnWriter;
use crate::{OutputError, OutputResult};

/// A [`TurnObserver`] that streams each turn to a [`TurnWriter`] as soon as
/// the scheduler produces it.
///
/// `TurnObserver` methods return nothing, so write errors are stored and
/// further writes are skipped.  Check [`take_error`](Self::take_error) after
/// the run.
pub struct TurnOutputObserver<'g, W: TurnWriter> {
    graph:      &'g Graph,
    writer:     W,
    last_error: Option<OutputError>,
}

impl<'g, W: TurnWriter> TurnOutputObserver<'g, W> {
    pub fn new(graph: &'g Graph, writer: W) -> Self {
        Self { graph, writer, last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TurnWriter> TurnObserver for TurnOutputObserver<'_, W> {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move]) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_turn(self.graph, turn, moves);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

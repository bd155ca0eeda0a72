//! Plain move-notation backend.

use std::io::Write;

use af_core::Turn;
use af_graph::Graph;
use af_sched::Move;

use crate::emit::format_moves;
use crate::writer::TurnWriter;
use crate::OutputResult;

/// Writes one `L<n>-<room> …` line per non-empty turn to any `io::Write`.
///
/// Lines are held back until [`finish`](TurnWriter::finish), which
/// [`TurnOutputObserver`](crate::TurnOutputObserver) only calls once a run
/// completes.  A run that fails partway leaves `out` untouched.
pub struct LineWriter<W: Write> {
    out:      W,
    preamble: Option<Vec<String>>,
    pending:  String,
    finished: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, preamble: None, pending: String::new(), finished: false }
    }

    /// Like [`new`](Self::new), but `lines` and a blank separator line are
    /// written ahead of the first turn.  Nothing is written if no turn ever
    /// arrives.
    pub fn with_preamble(out: W, lines: Vec<String>) -> Self {
        Self { out, preamble: Some(lines), pending: String::new(), finished: false }
    }

    /// Unwrap the inner sink (e.g. a `Vec<u8>` in tests).  Lines not yet
    /// flushed by `finish` are dropped.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TurnWriter for LineWriter<W> {
    fn write_turn(&mut self, graph: &Graph, _turn: Turn, moves: &[Move]) -> OutputResult<()> {
        if moves.is_empty() {
            return Ok(());
        }
        self.pending.push_str(&format_moves(graph, moves));
        self.pending.push('\n');
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.pending.is_empty() {
            return Ok(());
        }
        if let Some(lines) = self.preamble.take() {
            for line in &lines {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
        }
        self.out.write_all(self.pending.as_bytes())?;
        self.pending.clear();
        self.out.flush()?;
        Ok(())
    }
}

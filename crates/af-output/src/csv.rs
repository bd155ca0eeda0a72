//! CSV backend.
//!
//! Columns: `turn,agent,room`: one row per move, agent as its 1-based
//! number and room by name.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use af_core::Turn;
use af_graph::Graph;
use af_sched::Move;

use crate::writer::TurnWriter;
use crate::OutputResult;

/// Writes the move log as CSV.
pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(["turn", "agent", "room"])?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and unwrap the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows
            .into_inner()
            .map_err(|e| crate::OutputError::Io(e.into_error()))
    }
}

impl<W: Write> TurnWriter for CsvWriter<W> {
    fn write_turn(&mut self, graph: &Graph, turn: Turn, moves: &[Move]) -> OutputResult<()> {
        for m in moves {
            self.rows.write_record(&[
                turn.0.to_string(),
                m.agent.number().to_string(),
                graph.name(m.room).to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}

//! `af-output`: rendering schedules.
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`emit`]     | `format_move`, `format_turn`, `render` (move notation)  |
//! | [`writer`]   | `TurnWriter` trait                                      |
//! | [`lines`]    | `LineWriter`: one `L<n>-<room>` line per turn           |
//! | [`csv`]      | `CsvWriter`: one `turn,agent,room` row per move         |
//! | [`observer`] | `TurnOutputObserver`: streams a run into a writer       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use af_output::{LineWriter, TurnOutputObserver};
//!
//! let mut obs = TurnOutputObserver::new(&graph, LineWriter::new(std::io::stdout()));
//! let plan = af_sched::solve(&graph, agents, &config, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod emit;
pub mod error;
pub mod lines;
pub mod observer;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use emit::{format_move, format_moves, format_turn, render};
pub use error::{OutputError, OutputResult};
pub use lines::LineWriter;
pub use observer::TurnOutputObserver;
pub use writer::TurnWriter;

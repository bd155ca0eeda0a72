//! Unit tests for af-output.

use af_core::RunConfig;
use af_graph::{Graph, GraphBuilder};
use af_sched::{NoopObserver, Plan, solve};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn corridor() -> Graph {
    let mut b = GraphBuilder::new();
    b.add_room("start", 0, 0);
    b.add_room("A", 1, 0);
    b.add_room("end", 2, 0);
    b.add_tunnel("start", "A");
    b.add_tunnel("A", "end");
    b.build("start", "end").unwrap()
}

fn twin() -> Graph {
    let mut b = GraphBuilder::new();
    b.add_room("start", 0, 0);
    b.add_room("A", 1, 1);
    b.add_room("B", 1, -1);
    b.add_room("end", 2, 0);
    b.add_tunnel("start", "A");
    b.add_tunnel("A", "end");
    b.add_tunnel("start", "B");
    b.add_tunnel("B", "end");
    b.build("start", "end").unwrap()
}

fn plan(g: &Graph, agents: u32) -> Plan {
    solve(g, agents, &RunConfig::default(), &mut NoopObserver).unwrap()
}

// ── Emitter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod emit_tests {
    use af_core::{AgentId, Turn};
    use af_sched::{Move, TurnMoves};

    use super::*;
    use crate::{format_move, format_turn, render};

    #[test]
    fn move_notation() {
        let g = corridor();
        let m = Move { agent: AgentId(0), room: g.lookup("A").unwrap() };
        assert_eq!(format_move(&g, &m), "L1-A");
    }

    #[test]
    fn turn_joined_by_single_space() {
        let g = twin();
        let turn = TurnMoves {
            turn:  Turn(1),
            moves: vec![
                Move { agent: AgentId(0), room: g.lookup("A").unwrap() },
                Move { agent: AgentId(1), room: g.lookup("B").unwrap() },
            ],
        };
        assert_eq!(format_turn(&g, &turn), "L1-A L2-B");
    }

    #[test]
    fn renders_single_corridor() {
        let g = corridor();
        assert_eq!(render(&g, &plan(&g, 2).log), ["L1-A", "L1-end L2-A", "L2-end"]);
    }

    #[test]
    fn renders_twin_corridors() {
        let g = twin();
        assert_eq!(render(&g, &plan(&g, 2).log), ["L1-A L2-B", "L1-end L2-end"]);
    }

    #[test]
    fn empty_turns_skipped() {
        let g = corridor();
        let mut log = af_sched::TurnLog::new();
        log.push(TurnMoves { turn: Turn(1), moves: vec![] });
        log.push(TurnMoves {
            turn:  Turn(2),
            moves: vec![Move { agent: AgentId(4), room: g.end() }],
        });
        assert_eq!(render(&g, &log), ["L5-end"]);
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer_tests {
    use std::io;

    use af_core::Turn;
    use af_graph::Graph;
    use af_sched::Move;

    use super::*;
    use crate::{CsvWriter, LineWriter, OutputError, OutputResult, TurnOutputObserver, TurnWriter};

    #[test]
    fn line_writer_streams_turns() {
        let g = corridor();
        let mut obs = TurnOutputObserver::new(&g, LineWriter::new(Vec::new()));
        solve(&g, 2, &RunConfig::default(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert_eq!(text, "L1-A\nL1-end L2-A\nL2-end\n");
    }

    #[test]
    fn line_writer_skips_empty_turn() {
        let g = corridor();
        let mut w = LineWriter::new(Vec::new());
        w.write_turn(&g, Turn(1), &[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn preamble_precedes_first_turn() {
        let g = corridor();
        let header = vec!["1".to_owned(), "##start".to_owned()];
        let mut obs = TurnOutputObserver::new(&g, LineWriter::with_preamble(Vec::new(), header));
        solve(&g, 1, &RunConfig::default(), &mut obs).unwrap();
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert_eq!(text, "1\n##start\n\nL1-A\nL1-end\n");
    }

    #[test]
    fn preamble_withheld_without_turns() {
        let g = corridor();
        let mut w = LineWriter::with_preamble(Vec::new(), vec!["1".to_owned()]);
        w.write_turn(&g, Turn(1), &[]).unwrap();
        w.finish().unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn lines_held_until_finish() {
        let g = corridor();
        let step = [Move { agent: af_core::AgentId(0), room: g.lookup("A").unwrap() }];

        let mut unfinished = LineWriter::new(Vec::new());
        unfinished.write_turn(&g, Turn(1), &step).unwrap();
        assert!(unfinished.into_inner().is_empty());

        let mut finished = LineWriter::new(Vec::new());
        finished.write_turn(&g, Turn(1), &step).unwrap();
        finished.finish().unwrap();
        assert_eq!(finished.into_inner(), b"L1-A\n");
    }

    #[test]
    fn failed_run_writes_nothing() {
        use af_sched::{PipelineError, SimError};

        let g = corridor();
        let header = vec!["2".to_owned()];
        let mut obs = TurnOutputObserver::new(&g, LineWriter::with_preamble(Vec::new(), header));
        let cfg = RunConfig { max_turns: Some(2), ..RunConfig::default() };
        let err = solve(&g, 2, &cfg, &mut obs).unwrap_err();
        assert!(matches!(err, PipelineError::Sim(SimError::TurnLimit { limit: 2 })));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().into_inner().is_empty());
    }

    #[test]
    fn csv_rows_per_move() {
        let g = twin();
        let mut obs = TurnOutputObserver::new(&g, CsvWriter::from_writer(Vec::new()).unwrap());
        solve(&g, 2, &RunConfig::default(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        let bytes = obs.into_writer().into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "turn,agent,room\n1,1,A\n1,2,B\n2,1,end\n2,2,end\n"
        );
    }

    #[test]
    fn csv_file_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.csv");
        let g = corridor();
        let mut obs = TurnOutputObserver::new(&g, CsvWriter::create(&path).unwrap());
        solve(&g, 1, &RunConfig::default(), &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1 + 2);
    }

    /// Writer that fails every call.
    struct Broken {
        calls: usize,
    }

    impl TurnWriter for Broken {
        fn write_turn(&mut self, _g: &Graph, _t: Turn, _m: &[Move]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other("disk full")))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("close failed")))
        }
    }

    #[test]
    fn first_error_kept_and_writes_stop() {
        let g = corridor();
        let mut obs = TurnOutputObserver::new(&g, Broken { calls: 0 });
        solve(&g, 3, &RunConfig::default(), &mut obs).unwrap();
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 1);
    }
}

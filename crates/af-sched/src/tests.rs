//! Unit tests for af-sched.

use af_core::RunConfig;
use af_graph::{Graph, GraphBuilder};
use af_path::{Path, PathSet};

use crate::TurnLog;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a graph from room names and `"a-b"` tunnels; first room is start,
/// last is end.
fn graph(rooms: &[&str], tunnels: &[&str]) -> Graph {
    let mut b = GraphBuilder::new();
    for (i, r) in rooms.iter().enumerate() {
        b.add_room(*r, i as i64, 0);
    }
    for t in tunnels {
        let (a, c) = t.split_once('-').unwrap();
        b.add_tunnel(a, c);
    }
    b.build(rooms[0], rooms[rooms.len() - 1]).unwrap()
}

/// `start-A-end`.
fn corridor() -> Graph {
    graph(&["start", "A", "end"], &["start-A", "A-end"])
}

/// `start-A-end` and `start-B-end`.
fn twin() -> Graph {
    graph(&["start", "A", "B", "end"], &["start-A", "A-end", "start-B", "B-end"])
}

fn path_by_names(g: &Graph, names: &[&str]) -> Path {
    Path::new(names.iter().map(|n| g.lookup(n).unwrap()).collect())
}

/// Each turn as `(agent number, room name)` pairs.
fn turns(g: &Graph, log: &TurnLog) -> Vec<Vec<(u64, String)>> {
    log.iter()
        .map(|t| {
            t.moves
                .iter()
                .map(|m| (m.agent.number(), g.name(m.room).to_owned()))
                .collect()
        })
        .collect()
}

fn mv(n: u64, room: &str) -> (u64, String) {
    (n, room.to_owned())
}

fn cfg() -> RunConfig {
    RunConfig::default()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SchedulerBuilder, SimError};

    #[test]
    fn empty_path_set_rejected() {
        let err = SchedulerBuilder::new(PathSet::empty(), 3).build().unwrap_err();
        assert_eq!(err, SimError::NoPaths);
    }

    #[test]
    fn zero_agents_rejected() {
        let g = corridor();
        let set = PathSet::new(vec![path_by_names(&g, &["start", "A", "end"])]).unwrap();
        let err = SchedulerBuilder::new(set, 0).build().unwrap_err();
        assert_eq!(err, SimError::NoAgents);
    }

    #[test]
    fn turn_bound_is_longest_plus_agents() {
        let g = twin();
        let set = PathSet::new(vec![
            path_by_names(&g, &["start", "A", "end"]),
            path_by_names(&g, &["start", "B", "end"]),
        ])
        .unwrap();
        let s = SchedulerBuilder::new(set, 4).build().unwrap();
        assert_eq!(s.turn_bound(), 3 + 4);
        assert_eq!(s.agent_count(), 4);
    }
}

// ── Assignment & stepping ─────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use af_core::{AgentId, Turn};

    use super::*;
    use crate::{AgentState, SchedulerBuilder};

    fn twin_scheduler(agents: u32) -> (Graph, crate::Scheduler) {
        let g = twin();
        let set = PathSet::new(vec![
            path_by_names(&g, &["start", "A", "end"]),
            path_by_names(&g, &["start", "B", "end"]),
        ])
        .unwrap();
        let s = SchedulerBuilder::new(set, agents).build().unwrap();
        (g, s)
    }

    #[test]
    fn round_robin_assignment() {
        let (_, s) = twin_scheduler(5);
        let state = s.initial_state();
        let assigned: Vec<usize> = state.agents.iter().map(|a| a.path).collect();
        assert_eq!(assigned, [0, 1, 0, 1, 0]);
        let ids: Vec<AgentId> = state.agents.iter().map(|a| a.id).collect();
        assert_eq!(ids, (0..5).map(AgentId).collect::<Vec<_>>());
        assert_eq!(state.turn, Turn::ZERO);
        assert!(state.agents.iter().all(|a| a.state(s.paths()) == AgentState::AtStart));
    }

    #[test]
    fn single_step_moves_one_per_path() {
        let (g, s) = twin_scheduler(4);
        let (state, moves) = s.step(s.initial_state()).unwrap();
        assert_eq!(moves.turn, Turn(1));
        assert_eq!(state.turn, Turn(1));
        assert_eq!(moves.moves.len(), 2);
        assert_eq!(state.census(s.paths()), (2, 2, 0));

        let a = g.lookup("A").unwrap();
        assert_eq!(state.agents[0].state(s.paths()), AgentState::InTransit(a));
        assert!(state.occupied().contains(a));
        assert!(!state.occupied().contains(g.start()));
    }

    #[test]
    fn stepping_is_repeatable() {
        let (_, s) = twin_scheduler(3);
        let first = s.step(s.initial_state()).unwrap();
        let again = s.step(s.initial_state()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn end_room_is_never_occupied() {
        let (g, s) = twin_scheduler(2);
        let (state, _) = s.step(s.initial_state()).unwrap();
        let (state, _) = s.step(state).unwrap();
        assert!(state.is_finished(s.paths()));
        assert!(!state.occupied().contains(g.end()));
        assert!(state.occupied().is_empty());
        assert_eq!(state.census(s.paths()), (0, 0, 2));
    }

    #[test]
    fn stepping_finished_state_is_noop() {
        let (_, s) = twin_scheduler(1);
        let (state, _) = s.step(s.initial_state()).unwrap();
        let (state, _) = s.step(state).unwrap();
        let (state, moves) = s.step(state).unwrap();
        assert!(moves.is_empty());
        assert_eq!(state.remaining(s.paths()), 0);
    }
}

// ── Reference scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use af_graph::TopologyError;
    use af_path::PathError;

    use super::*;
    use crate::{NoopObserver, PipelineError, solve};

    #[test]
    fn one_corridor_two_agents() {
        let g = corridor();
        let plan = solve(&g, 2, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(plan.paths.len(), 1);
        assert_eq!(
            turns(&g, &plan.log),
            vec![
                vec![mv(1, "A")],
                vec![mv(1, "end"), mv(2, "A")],
                vec![mv(2, "end")],
            ]
        );
    }

    #[test]
    fn two_corridors_two_agents() {
        let g = twin();
        let plan = solve(&g, 2, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(plan.paths.len(), 2);
        assert_eq!(
            turns(&g, &plan.log),
            vec![
                vec![mv(1, "A"), mv(2, "B")],
                vec![mv(1, "end"), mv(2, "end")],
            ]
        );
    }

    #[test]
    fn self_loop_never_reaches_scheduler() {
        let mut b = GraphBuilder::new();
        b.add_room("start", 0, 0);
        b.add_room("X", 1, 0);
        b.add_room("end", 2, 0);
        b.add_tunnel("start", "X");
        b.add_tunnel("X", "X");
        b.add_tunnel("X", "end");
        assert_eq!(b.build("start", "end").unwrap_err(), TopologyError::SelfLoop("X".into()));
    }

    #[test]
    fn disconnected_endpoints_fail() {
        let g = graph(&["start", "A", "B", "end"], &["start-A", "B-end"]);
        let err = solve(&g, 3, &cfg(), &mut NoopObserver).unwrap_err();
        match err {
            PipelineError::Path(PathError::NoPath { start, end }) => {
                assert_eq!(start, "start");
                assert_eq!(end, "end");
            }
            other => panic!("expected NoPath, got {other:?}"),
        }
    }

    #[test]
    fn direct_tunnel_releases_one_agent_per_turn() {
        let g = graph(&["start", "end"], &["start-end"]);
        let plan = solve(&g, 3, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(
            turns(&g, &plan.log),
            vec![vec![mv(1, "end")], vec![mv(2, "end")], vec![mv(3, "end")]]
        );
    }

    #[test]
    fn start_exit_capped_by_path_count() {
        // Direct tunnel plus one corridor: two paths, so at most two agents
        // may leave the start room per turn.
        let g = graph(&["start", "A", "end"], &["start-end", "start-A", "A-end"]);
        let plan = solve(&g, 3, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(plan.paths.len(), 2);
        assert_eq!(
            turns(&g, &plan.log),
            vec![
                vec![mv(1, "end"), mv(2, "A")],
                vec![mv(2, "end"), mv(3, "end")],
            ]
        );
    }

    #[test]
    fn cap_limits_paths_to_agents() {
        let g = twin();
        let plan = solve(&g, 1, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(plan.paths.len(), 1);
        assert_eq!(turns(&g, &plan.log), vec![vec![mv(1, "A")], vec![mv(1, "end")]]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let g = graph(
            &["s", "a", "b", "c", "d", "e"],
            &["s-a", "s-b", "a-c", "b-c", "c-e", "b-d", "d-e", "a-e"],
        );
        let first = solve(&g, 7, &cfg(), &mut NoopObserver).unwrap();
        let second = solve(&g, 7, &cfg(), &mut NoopObserver).unwrap();
        assert_eq!(first.log, second.log);
        assert_eq!(first.paths, second.paths);
    }
}

// ── Run loop & observers ──────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use af_core::Turn;

    use super::*;
    use crate::{Move, SchedulerBuilder, SimError, TurnObserver};

    /// Observer that records hook calls.
    #[derive(Default)]
    struct Recorder {
        starts: Vec<Turn>,
        ends:   Vec<(Turn, usize)>,
        done:   Option<Turn>,
    }

    impl TurnObserver for Recorder {
        fn on_turn_start(&mut self, turn: Turn) {
            self.starts.push(turn);
        }
        fn on_turn_end(&mut self, turn: Turn, moves: &[Move]) {
            self.ends.push((turn, moves.len()));
        }
        fn on_run_end(&mut self, final_turn: Turn) {
            self.done = Some(final_turn);
        }
    }

    #[test]
    fn observer_sees_every_turn() {
        let g = corridor();
        let set = PathSet::new(vec![path_by_names(&g, &["start", "A", "end"])]).unwrap();
        let s = SchedulerBuilder::new(set, 2).build().unwrap();
        let mut rec = Recorder::default();
        let log = s.run(&mut rec).unwrap();

        assert_eq!(rec.starts, [Turn(1), Turn(2), Turn(3)]);
        assert_eq!(rec.ends, [(Turn(1), 1), (Turn(2), 2), (Turn(3), 1)]);
        assert_eq!(rec.done, Some(Turn(3)));
        assert_eq!(log.turn_count(), 3);
        assert_eq!(log.total_moves(), 4);
    }

    #[test]
    fn turn_limit_enforced() {
        let g = corridor();
        let set = PathSet::new(vec![path_by_names(&g, &["start", "A", "end"])]).unwrap();
        let s = SchedulerBuilder::new(set, 2).max_turns(Some(2)).build().unwrap();
        assert_eq!(s.run_to_end().unwrap_err(), SimError::TurnLimit { limit: 2 });
    }

    #[test]
    fn long_queue_finishes_within_bound() {
        let g = graph(&["s", "a", "b", "c", "e"], &["s-a", "a-b", "b-c", "c-e"]);
        let set = PathSet::new(vec![path_by_names(&g, &["s", "a", "b", "c", "e"])]).unwrap();
        let s = SchedulerBuilder::new(set, 10).build().unwrap();
        let log = s.run_to_end().unwrap();
        // Pipeline: one new agent per turn, four hops each.
        assert_eq!(log.turn_count(), 10 + 4 - 1);
        assert!(log.turn_count() as u64 <= s.turn_bound());
    }

    #[test]
    fn moves_iterator_tags_turns() {
        let g = twin();
        let set = PathSet::new(vec![
            path_by_names(&g, &["start", "A", "end"]),
            path_by_names(&g, &["start", "B", "end"]),
        ])
        .unwrap();
        let log = SchedulerBuilder::new(set, 2).build().unwrap().run_to_end().unwrap();
        let tagged: Vec<u64> = log.moves().map(|(t, _)| t.0).collect();
        assert_eq!(tagged, [1, 1, 2, 2]);
    }
}

//! The `Scheduler` and its turn loop.

use tracing::{info, trace};

use af_core::AgentId;
use af_path::PathSet;

use crate::{Agent, Move, SimError, SimResult, SimState, TurnLog, TurnMoves, TurnObserver};

/// Moves a fixed set of agents along a fixed set of disjoint paths.
///
/// Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub(crate) paths:       PathSet,
    pub(crate) agent_count: u32,
    pub(crate) max_turns:   Option<u64>,
}

impl Scheduler {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    pub fn agent_count(&self) -> u32 {
        self.agent_count
    }

    /// Upper bound on the number of turns any run needs:
    /// longest path length plus agent count.
    pub fn turn_bound(&self) -> u64 {
        self.paths.longest() as u64 + self.agent_count as u64
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Every agent at the start room, assigned round-robin: the agent at
    /// index `i` follows path `i mod k`.
    pub fn initial_state(&self) -> SimState {
        let k = self.paths.len();
        let agents = (0..self.agent_count)
            .map(|i| Agent::new(AgentId(i), i as usize % k))
            .collect();
        SimState::new(agents)
    }

    /// Simulate one turn.
    ///
    /// Consumes `state` and returns the state after the turn together with
    /// the moves made.  Stepping a finished state returns it unchanged apart
    /// from the turn counter, with no moves.
    pub fn step(&self, mut state: SimState) -> SimResult<(SimState, TurnMoves)> {
        let turn = state.turn.next();
        let entry_slots = self.paths.len();
        let mut left_start = 0usize;
        let mut moves = Vec::new();

        for agent in state.agents.iter_mut() {
            let path = self.paths.get(agent.path);
            let Some(next) = path.at(agent.position + 1) else {
                continue; // already at the end
            };
            let leaving_start = agent.position == 0;
            let terminal = next == path.last();

            if leaving_start && left_start >= entry_slots {
                continue;
            }
            if !terminal && state.occupied.contains(next) {
                continue;
            }

            if !leaving_start {
                state.occupied.remove(path.rooms()[agent.position]);
            }
            if !terminal {
                state.occupied.insert(next);
            }
            if leaving_start {
                left_start += 1;
            }
            agent.position += 1;
            moves.push(Move { agent: agent.id, room: next });
        }

        state.turn = turn;
        if moves.is_empty() {
            let remaining = state.remaining(&self.paths);
            if remaining > 0 {
                return Err(SimError::Deadlock { turn, remaining });
            }
        }

        trace!(%turn, moves = moves.len(), entered = left_start, "turn complete");
        Ok((state, TurnMoves { turn, moves }))
    }

    /// [`run`](Self::run) without an observer.
    pub fn run_to_end(&self) -> SimResult<TurnLog> {
        self.run(&mut crate::NoopObserver)
    }

    /// Run from the initial state until every agent reaches the end room.
    ///
    /// Fails with [`SimError::TurnLimit`] if the run exceeds the configured
    /// `max_turns` (or [`turn_bound`](Self::turn_bound) when unset).
    pub fn run<O: TurnObserver>(&self, observer: &mut O) -> SimResult<TurnLog> {
        let limit = self.max_turns.unwrap_or_else(|| self.turn_bound());
        let mut state = self.initial_state();
        let mut log = TurnLog::new();

        while !state.is_finished(&self.paths) {
            if state.turn.0 >= limit {
                return Err(SimError::TurnLimit { limit });
            }
            observer.on_turn_start(state.turn.next());
            let (next, moves) = self.step(state)?;
            observer.on_turn_end(moves.turn, &moves.moves);
            log.push(moves);
            state = next;
        }
        observer.on_run_end(state.turn);

        info!(
            turns = state.turn.0,
            agents = self.agent_count,
            paths = self.paths.len(),
            "schedule complete",
        );
        Ok(log)
    }
}

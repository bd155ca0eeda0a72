//! The value threaded through [`Scheduler::step`](crate::Scheduler::step).

use af_core::Turn;
use af_path::{PathSet, RoomSet};

use crate::{Agent, AgentState};

/// Complete simulation state between two turns.
///
/// The scheduler consumes one `SimState` and returns the next, so a run can
/// be stepped and inspected turn by turn without any hidden mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimState {
    /// Last completed turn; `Turn::ZERO` before the first step.
    pub turn: Turn,

    /// Agents in ascending `AgentId` order.
    pub agents: Vec<Agent>,

    /// Interior rooms currently holding an agent.  Start and end are never
    /// entered here.
    pub(crate) occupied: RoomSet,
}

impl SimState {
    pub(crate) fn new(agents: Vec<Agent>) -> Self {
        Self { turn: Turn::ZERO, agents, occupied: RoomSet::new() }
    }

    pub fn occupied(&self) -> &RoomSet {
        &self.occupied
    }

    /// Agents not yet at the end room.
    pub fn remaining(&self, paths: &PathSet) -> usize {
        self.agents.iter().filter(|a| !a.is_done(paths)).count()
    }

    pub fn is_finished(&self, paths: &PathSet) -> bool {
        self.agents.iter().all(|a| a.is_done(paths))
    }

    /// Agents grouped by state, for diagnostics: `(at_start, in_transit, at_end)`.
    pub fn census(&self, paths: &PathSet) -> (usize, usize, usize) {
        self.agents.iter().fold((0, 0, 0), |(s, t, e), a| match a.state(paths) {
            AgentState::AtStart      => (s + 1, t, e),
            AgentState::InTransit(_) => (s, t + 1, e),
            AgentState::AtEnd        => (s, t, e + 1),
        })
    }
}

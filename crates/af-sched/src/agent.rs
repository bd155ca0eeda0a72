//! Per-agent movement state.

use af_core::{AgentId, RoomId};
use af_path::PathSet;

/// Where an agent is along its path.
///
/// `AtStart → InTransit(room) → … → AtEnd`; `AtEnd` is terminal.  The start
/// and end rooms are exempt from occupancy, so any number of agents may be
/// `AtStart` or `AtEnd` at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    AtStart,
    InTransit(RoomId),
    AtEnd,
}

/// One agent: which selected path it follows and how far along it is.
///
/// Only `position` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub id:       AgentId,
    /// Index into the scheduler's `PathSet`.
    pub path:     usize,
    /// Index into that path's room sequence; 0 is the start room.
    pub position: usize,
}

impl Agent {
    pub fn new(id: AgentId, path: usize) -> Self {
        Self { id, path, position: 0 }
    }

    pub fn state(&self, paths: &PathSet) -> AgentState {
        let path = paths.get(self.path);
        if self.position == 0 {
            AgentState::AtStart
        } else if self.position + 1 >= path.len() {
            AgentState::AtEnd
        } else {
            AgentState::InTransit(path.rooms()[self.position])
        }
    }

    #[inline]
    pub fn is_done(&self, paths: &PathSet) -> bool {
        self.position + 1 >= paths.get(self.path).len()
    }
}

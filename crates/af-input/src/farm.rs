//! The parsed farm description.

use af_graph::{Graph, Room, TopologyResult, Tunnel};

/// Everything a farm file declares, before graph validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Farm {
    pub agent_count: u32,
    /// Rooms in file order.
    pub rooms:       Vec<Room>,
    /// Tunnels in file order.
    pub tunnels:     Vec<Tunnel>,
    pub start:       String,
    pub end:         String,
    /// The input text line by line, kept for echoing before the schedule.
    pub lines:       Vec<String>,
}

impl Farm {
    /// Build the validated graph.  Tunnel order is preserved, so neighbor
    /// order follows the file.
    pub fn to_graph(&self) -> TopologyResult<Graph> {
        Graph::new(
            self.rooms.iter().cloned(),
            self.tunnels.iter().cloned(),
            &self.start,
            &self.end,
        )
    }
}

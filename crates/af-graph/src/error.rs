//! Graph construction errors.

use thiserror::Error;

/// Structural problems found while building a [`Graph`](crate::Graph).
///
/// All variants are fatal: no path search runs on an invalid graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("room {0:?} is defined more than once")]
    DuplicateRoom(String),

    #[error("designated endpoint {0:?} is not a known room")]
    UnknownEndpoint(String),

    #[error("start and end are the same room {0:?}")]
    SameEndpoints(String),

    #[error("room {0:?} links to itself")]
    SelfLoop(String),

    #[error("tunnel {a}-{b} references unknown room {room:?}")]
    UnknownRoom { room: String, a: String, b: String },

    #[error("{count} rooms exceed the room id range")]
    TooManyRooms { count: usize },
}

pub type TopologyResult<T> = Result<T, TopologyError>;

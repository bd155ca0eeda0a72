//! `af-graph`: the room graph.
//!
//! # Crate layout
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`graph`] | `Room`, `Tunnel`, `Graph`, `GraphBuilder`        |
//! | [`error`] | `TopologyError`, `TopologyResult<T>`             |
//!
//! A [`Graph`] is built once and never mutated.  Neighbor lists keep tunnel
//! insertion order, which is what makes path discovery order (and therefore
//! the whole schedule) deterministic.

pub mod error;
pub mod graph;


pub use error::{TopologyError, TopologyResult};
pub use graph::{Graph, GraphBuilder, Room, Tunnel};

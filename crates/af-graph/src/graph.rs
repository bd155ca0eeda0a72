//! Graph representation and builder.
//!
//! # Data layout
//!
//! Rooms live in a `Vec<Room>` indexed by [`RoomId`].  Adjacency is a
//! `Vec<Vec<RoomId>>` with the same indexing; each inner list holds the
//! neighbors in the order their tunnels were added.  A name → id map is kept
//! for lookups from textual input, but nothing iterates it, so hash order can
//! never leak into results.

use rustc_hash::FxHashMap;
use tracing::debug;

use af_core::RoomId;

use crate::{TopologyError, TopologyResult};

// ── Room / Tunnel ─────────────────────────────────────────────────────────────

/// A graph vertex.  Coordinates are carried for output fidelity only; no
/// algorithm reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub x:    i64,
    pub y:    i64,
}

impl Room {
    pub fn new(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self { name: name.into(), x, y }
    }
}

/// An undirected edge between two rooms, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tunnel {
    pub a: String,
    pub b: String,
}

impl Tunnel {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into() }
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Immutable undirected room graph with designated `start` and `end` rooms.
///
/// Do not construct directly; use [`GraphBuilder`] or [`Graph::new`].
#[derive(Debug, Clone)]
pub struct Graph {
    rooms:     Vec<Room>,
    neighbors: Vec<Vec<RoomId>>,
    by_name:   FxHashMap<String, RoomId>,
    start:     RoomId,
    end:       RoomId,
    tunnels:   usize,
}

impl Graph {
    /// Build a graph in one shot from room and tunnel lists.
    pub fn new(
        rooms:   impl IntoIterator<Item = Room>,
        tunnels: impl IntoIterator<Item = Tunnel>,
        start:   &str,
        end:     &str,
    ) -> TopologyResult<Self> {
        let mut b = GraphBuilder::new();
        for room in rooms {
            b.add_room(room.name, room.x, room.y);
        }
        for t in tunnels {
            b.add_tunnel(t.a, t.b);
        }
        b.build(start, end)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of distinct undirected tunnels (repeats collapsed).
    pub fn tunnel_count(&self) -> usize {
        self.tunnels
    }

    // ── Endpoints ─────────────────────────────────────────────────────────

    #[inline]
    pub fn start(&self) -> RoomId {
        self.start
    }

    #[inline]
    pub fn end(&self) -> RoomId {
        self.end
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The room with id `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    #[inline]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Shorthand for `self.room(id).name`.
    #[inline]
    pub fn name(&self, id: RoomId) -> &str {
        &self.rooms[id.index()].name
    }

    pub fn lookup(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .map_while(|(i, r)| RoomId::try_from(i).ok().map(|id| (id, r)))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Neighbors of `id` in tunnel insertion order.
    #[inline]
    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        &self.neighbors[id.index()]
    }

    #[inline]
    pub fn degree(&self, id: RoomId) -> usize {
        self.neighbors[id.index()].len()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// Rooms and tunnels may be added in any order; all validation is deferred to
/// `build()` so errors are reported against the complete room table.
///
/// # Example
///
/// ```
/// use af_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_room("start", 0, 0);
/// b.add_room("a", 1, 0);
/// b.add_room("end", 2, 0);
/// b.add_tunnel("start", "a");
/// b.add_tunnel("a", "end");
/// let g = b.build("start", "end").unwrap();
/// assert_eq!(g.room_count(), 3);
/// assert_eq!(g.tunnel_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    rooms:   Vec<Room>,
    tunnels: Vec<Tunnel>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room and return the id it will have in the built graph
    /// (sequential from 0).  Past the id range this returns
    /// [`RoomId::INVALID`] and `build()` fails with `TooManyRooms`.
    pub fn add_room(&mut self, name: impl Into<String>, x: i64, y: i64) -> RoomId {
        let id = RoomId::try_from(self.rooms.len()).unwrap_or(RoomId::INVALID);
        self.rooms.push(Room::new(name, x, y));
        id
    }

    /// Add an undirected tunnel between two rooms named `a` and `b`.
    pub fn add_tunnel(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.tunnels.push(Tunnel::new(a, b));
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn tunnel_count(&self) -> usize { self.tunnels.len() }

    /// Validate and consume the builder.
    ///
    /// Checks, in order: the room id range, duplicate room names, that
    /// `start` and `end` exist and differ, then every tunnel for
    /// self-reference and unknown rooms.
    /// A tunnel repeated between the same pair contributes one adjacency entry.
    pub fn build(self, start: &str, end: &str) -> TopologyResult<Graph> {
        let mut by_name: FxHashMap<String, RoomId> =
            FxHashMap::with_capacity_and_hasher(self.rooms.len(), Default::default());
        for (i, room) in self.rooms.iter().enumerate() {
            let id = RoomId::try_from(i)
                .map_err(|_| TopologyError::TooManyRooms { count: self.rooms.len() })?;
            if by_name.insert(room.name.clone(), id).is_some() {
                return Err(TopologyError::DuplicateRoom(room.name.clone()));
            }
        }

        let start_id = *by_name
            .get(start)
            .ok_or_else(|| TopologyError::UnknownEndpoint(start.to_owned()))?;
        let end_id = *by_name
            .get(end)
            .ok_or_else(|| TopologyError::UnknownEndpoint(end.to_owned()))?;
        if start_id == end_id {
            return Err(TopologyError::SameEndpoints(start.to_owned()));
        }

        let mut neighbors: Vec<Vec<RoomId>> = vec![Vec::new(); self.rooms.len()];
        let mut tunnels = 0usize;
        for t in &self.tunnels {
            if t.a == t.b {
                return Err(TopologyError::SelfLoop(t.a.clone()));
            }
            let resolve = |name: &str| {
                by_name.get(name).copied().ok_or_else(|| TopologyError::UnknownRoom {
                    room: name.to_owned(),
                    a:    t.a.clone(),
                    b:    t.b.clone(),
                })
            };
            let a = resolve(&t.a)?;
            let b = resolve(&t.b)?;

            if neighbors[a.index()].contains(&b) {
                debug!(a = %t.a, b = %t.b, "ignoring repeated tunnel");
                continue;
            }
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
            tunnels += 1;
        }

        debug!(rooms = self.rooms.len(), tunnels, start, end, "graph built");

        Ok(Graph {
            rooms: self.rooms,
            neighbors,
            by_name,
            start: start_id,
            end: end_id,
            tunnels,
        })
    }
}

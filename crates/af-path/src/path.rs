//! Path and path-set types.

use std::fmt;

use af_core::RoomId;
use af_graph::Graph;

use crate::{PathError, PathResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A simple path: first room is the graph's start, last is its end, and no
/// room repeats.  Only the enumerator creates these from a graph; tests may
/// build them by hand with [`Path::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    rooms: Vec<RoomId>,
}

impl Path {
    /// Wrap a room sequence.
    ///
    /// # Panics
    /// Panics in debug mode if the sequence has fewer than two rooms.
    pub fn new(rooms: Vec<RoomId>) -> Self {
        debug_assert!(rooms.len() >= 2, "a path needs at least start and end");
        Self { rooms }
    }

    #[inline]
    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    /// Number of rooms, endpoints included.  A direct start–end tunnel has
    /// length 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of edges traversed, i.e. turns an unobstructed agent needs.
    #[inline]
    pub fn hops(&self) -> usize {
        self.rooms.len() - 1
    }

    /// The rooms strictly between start and end.
    #[inline]
    pub fn interior(&self) -> &[RoomId] {
        &self.rooms[1..self.rooms.len() - 1]
    }

    #[inline]
    pub fn first(&self) -> RoomId {
        self.rooms[0]
    }

    #[inline]
    pub fn last(&self) -> RoomId {
        self.rooms[self.rooms.len() - 1]
    }

    /// Room at `position`, or `None` past the end.
    #[inline]
    pub fn at(&self, position: usize) -> Option<RoomId> {
        self.rooms.get(position).copied()
    }

    /// `true` if no interior room of `self` is an interior room of `other`.
    pub fn is_disjoint(&self, other: &Path) -> bool {
        let other = RoomSet::from_rooms(other.interior());
        !other.intersects(self.interior())
    }

    /// Render with room names, e.g. `start -> A -> end`.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> PathDisplay<'a> {
        PathDisplay { path: self, graph }
    }
}

/// [`fmt::Display`] adapter returned by [`Path::display`].
pub struct PathDisplay<'a> {
    path:  &'a Path,
    graph: &'a Graph,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &room) in self.path.rooms.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(self.graph.name(room))?;
        }
        Ok(())
    }
}

// ── RoomSet ───────────────────────────────────────────────────────────────────

/// Dense bitset over `RoomId`s.
///
/// Used as the "claimed rooms" set threaded through disjoint-path selection,
/// where `with` returns an extended copy so each recursion level owns its own
/// view, and as the scheduler's occupancy board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSet {
    words: Vec<u64>,
}

impl RoomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rooms(rooms: &[RoomId]) -> Self {
        let mut set = Self::new();
        for &r in rooms {
            set.insert(r);
        }
        set
    }

    pub fn insert(&mut self, room: RoomId) {
        let (word, bit) = (room.index() / 64, room.index() % 64);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << bit;
    }

    pub fn remove(&mut self, room: RoomId) {
        let (word, bit) = (room.index() / 64, room.index() % 64);
        if let Some(w) = self.words.get_mut(word) {
            *w &= !(1u64 << bit);
        }
    }

    #[inline]
    pub fn contains(&self, room: RoomId) -> bool {
        let (word, bit) = (room.index() / 64, room.index() % 64);
        self.words.get(word).is_some_and(|w| w & (1u64 << bit) != 0)
    }

    /// `true` if any of `rooms` is in the set.
    pub fn intersects(&self, rooms: &[RoomId]) -> bool {
        rooms.iter().any(|&r| self.contains(r))
    }

    /// A copy of `self` with `rooms` added.
    pub fn with(&self, rooms: &[RoomId]) -> Self {
        let mut next = self.clone();
        for &r in rooms {
            next.insert(r);
        }
        next
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }
}

// ── PathSet ───────────────────────────────────────────────────────────────────

/// Paths whose interiors are pairwise disjoint.  Start and end are shared by
/// every member and exempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate pairwise interior disjointness.
    ///
    /// Returns [`PathError::Overlap`] naming the first offending pair.
    pub fn new(paths: Vec<Path>) -> PathResult<Self> {
        let mut claimed = RoomSet::new();
        for (i, p) in paths.iter().enumerate() {
            if claimed.intersects(p.interior()) {
                let first = paths[..i]
                    .iter()
                    .position(|q| !q.is_disjoint(p))
                    .unwrap_or(0);
                return Err(PathError::Overlap { first, second: i });
            }
            claimed = claimed.with(p.interior());
        }
        Ok(Self { paths })
    }

    /// Skip validation.  Caller guarantees disjointness.
    pub(crate) fn from_disjoint(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> &Path {
        &self.paths[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> + '_ {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[Path] {
        &self.paths
    }

    /// Length of the longest member, 0 for an empty set.
    pub fn longest(&self) -> usize {
        self.paths.iter().map(Path::len).max().unwrap_or(0)
    }
}

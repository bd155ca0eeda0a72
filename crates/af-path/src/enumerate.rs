//! Exhaustive simple-path enumeration.
//!
//! Depth-first backtracking from `start`, driven by an explicit frame stack.
//! The current path and the visited marks are owned by one `Dfs` value and
//! follow strict stack discipline: a room is marked and pushed on entry,
//! popped and unmarked on exit, so every sibling branch sees exactly the
//! rooms on its own prefix as visited.
//!
//! Longer alternates are kept: the selector packs disjoint routes around a
//! shared bottleneck out of them.

use tracing::debug;

use af_core::{RoomId, SearchLimits};
use af_graph::Graph;

use crate::{Path, PathError, PathResult};

/// Every simple path from `graph.start()` to `graph.end()`, in DFS discovery
/// order (neighbors visited in tunnel insertion order).
///
/// Returns an empty `Vec` when `end` is unreachable; deciding that this is a
/// failure is the caller's job.  Fails with [`PathError::TooManyPaths`] once
/// more than `limits.max_paths` paths have been found.
///
/// The walk keeps its own frame stack, so path length is bounded by memory
/// rather than by the thread's call stack.
pub fn enumerate_paths(graph: &Graph, limits: &SearchLimits) -> PathResult<Vec<Path>> {
    let mut dfs = Dfs {
        graph,
        end:       graph.end(),
        visited:   vec![false; graph.room_count()],
        frames:    Vec::new(),
        current:   Vec::new(),
        found:     Vec::new(),
        max_paths: limits.max_paths,
    };
    dfs.run(graph.start())?;
    debug_assert!(dfs.current.is_empty(), "DFS stack not unwound");

    debug!(
        paths = dfs.found.len(),
        shortest = dfs.found.iter().map(Path::len).min(),
        "enumerated simple paths",
    );
    Ok(dfs.found)
}

/// Stable ascending sort by room count.  Ties keep discovery order.
pub fn sort_by_length(paths: &mut [Path]) {
    paths.sort_by_key(Path::len);
}

// ── DFS state ─────────────────────────────────────────────────────────────────

/// One room on the current path and the index of its next unexplored
/// neighbor.
struct Frame {
    room:   RoomId,
    cursor: usize,
}

struct Dfs<'g> {
    graph:     &'g Graph,
    end:       RoomId,
    visited:   Vec<bool>,
    frames:    Vec<Frame>,
    current:   Vec<RoomId>,
    found:     Vec<Path>,
    max_paths: usize,
}

impl Dfs<'_> {
    fn run(&mut self, start: RoomId) -> PathResult<()> {
        let graph = self.graph;
        self.enter(start);
        while let Some(top) = self.frames.last_mut() {
            let room = top.room;
            if room == self.end {
                self.record()?;
                self.leave();
                continue;
            }
            match graph.neighbors(room).get(top.cursor).copied() {
                Some(next) => {
                    top.cursor += 1;
                    if !self.visited[next.index()] {
                        self.enter(next);
                    }
                }
                None => self.leave(),
            }
        }
        Ok(())
    }

    fn enter(&mut self, room: RoomId) {
        self.visited[room.index()] = true;
        self.current.push(room);
        self.frames.push(Frame { room, cursor: 0 });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.current.pop();
            self.visited[frame.room.index()] = false;
        }
    }

    fn record(&mut self) -> PathResult<()> {
        if self.found.len() >= self.max_paths {
            return Err(PathError::TooManyPaths { limit: self.max_paths });
        }
        self.found.push(Path::new(self.current.clone()));
        Ok(())
    }
}

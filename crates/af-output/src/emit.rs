//! Move notation.
//!
//! A move is `L<agent>-<room>` with the 1-based agent number and the room's
//! name.  A turn is its moves joined by single spaces.  Turns without moves
//! are never rendered.

use af_graph::Graph;
use af_sched::{Move, TurnLog, TurnMoves};

pub fn format_move(graph: &Graph, m: &Move) -> String {
    format!("L{}-{}", m.agent.number(), graph.name(m.room))
}

/// Space-separated moves, without a trailing newline.
pub fn format_moves(graph: &Graph, moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format_move(graph, m))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line for one turn.
pub fn format_turn(graph: &Graph, turn: &TurnMoves) -> String {
    format_moves(graph, &turn.moves)
}

/// Every non-empty turn of `log`, in turn order.
pub fn render(graph: &Graph, log: &TurnLog) -> Vec<String> {
    log.iter()
        .filter(|t| !t.is_empty())
        .map(|t| format_turn(graph, t))
        .collect()
}

//! Move records produced by the scheduler.

use af_core::{AgentId, RoomId, Turn};

/// One agent stepping into one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub agent: AgentId,
    pub room:  RoomId,
}

/// All moves of a single turn, in ascending agent order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnMoves {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

impl TurnMoves {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Ordered per-turn move history of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnLog {
    turns: Vec<TurnMoves>,
}

impl TurnLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: TurnMoves) {
        debug_assert!(
            self.turns.last().is_none_or(|t| t.turn < turn.turn),
            "turns must be appended in ascending order",
        );
        self.turns.push(turn);
    }

    /// Number of recorded turns.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnMoves> + '_ {
        self.turns.iter()
    }

    /// Every move in order, tagged with its turn.
    pub fn moves(&self) -> impl Iterator<Item = (Turn, &Move)> + '_ {
        self.turns
            .iter()
            .flat_map(|t| t.moves.iter().map(move |m| (t.turn, m)))
    }

    pub fn total_moves(&self) -> usize {
        self.turns.iter().map(|t| t.moves.len()).sum()
    }
}

//! Observer hooks for progress reporting and output.

use af_core::Turn;

use crate::Move;

/// Callbacks invoked by [`Scheduler::run`][crate::Scheduler::run] at turn
/// boundaries.
///
/// All methods default to no-ops so implementors override only what they
/// need.
///
/// # Example: move counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl TurnObserver for Counter {
///     fn on_turn_end(&mut self, _turn: Turn, moves: &[Move]) {
///         self.0 += moves.len();
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called before a turn is simulated.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called after a turn with the moves it produced, in agent order.
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move]) {}

    /// Called once after every agent has reached the end room.
    fn on_run_end(&mut self, _final_turn: Turn) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

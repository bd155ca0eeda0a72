//! `af-sched`: turn loop and pipeline driver for the antfarm router.
//!
//! # Turn loop
//!
//! ```text
//! for turn in 1..:
//!   for agent in ascending AgentId order (skip agents at the end room):
//!     next = room after the agent's current position on its path
//!     blocked if leaving start and `k` agents already left start this turn
//!     blocked if next is not the end room and is occupied
//!     otherwise: vacate current room, occupy next, record L<n>-<next>
//!   stop when every agent is at the end room
//! ```
//!
//! Occupancy updates immediately as each agent moves, so an agent may step
//! into a room that a lower-numbered agent left earlier in the same turn.
//! `k` is the number of selected paths.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`agent`]     | `Agent`, `AgentState`                                 |
//! | [`log`]       | `Move`, `TurnMoves`, `TurnLog`                        |
//! | [`state`]     | `SimState`: the value threaded through `step`         |
//! | [`scheduler`] | `Scheduler` (step / run)                              |
//! | [`builder`]   | `SchedulerBuilder`                                    |
//! | [`observer`]  | `TurnObserver`, `NoopObserver`                        |
//! | [`pipeline`]  | `solve`, `solve_with`, `Plan`                         |
//! | [`error`]     | `SimError`, `PipelineError`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use af_core::RunConfig;
//! use af_sched::{NoopObserver, solve};
//!
//! let plan = solve(&graph, 10, &RunConfig::default(), &mut NoopObserver)?;
//! println!("{} turns over {} paths", plan.log.turn_count(), plan.paths.len());
//! ```

pub mod agent;
pub mod builder;
pub mod error;
pub mod log;
pub mod observer;
pub mod pipeline;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentState};
pub use builder::SchedulerBuilder;
pub use error::{PipelineError, PipelineResult, SimError, SimResult};
pub use log::{Move, TurnLog, TurnMoves};
pub use observer::{NoopObserver, TurnObserver};
pub use pipeline::{Plan, solve, solve_with};
pub use scheduler::Scheduler;
pub use state::SimState;

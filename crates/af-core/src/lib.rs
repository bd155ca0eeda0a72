//! `af-core`: foundational types for the antfarm router.
//!
//! This crate is a dependency of every other `af-*` crate.  It has no `af-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `RoomId`, `AgentId`                        |
//! | [`turn`]   | `Turn`                                     |
//! | [`config`] | `SearchLimits`, `RunConfig`                |
//! | [`error`]  | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RunConfig, SearchLimits};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, RoomId};
pub use turn::Turn;

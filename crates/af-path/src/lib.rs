//! `af-path`: path discovery and selection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`path`]      | `Path`, `PathSet`, `RoomSet`                           |
//! | [`enumerate`] | `enumerate_paths`, `sort_by_length`                    |
//! | [`select`]    | `Selector` trait, `BranchAndBound`                     |
//! | [`error`]     | `PathError`, `PathResult<T>`                           |
//!
//! # Pipeline
//!
//! ```text
//! enumerate_paths(graph)   every simple start→end path, DFS discovery order
//!   → sort_by_length       ascending, stable on ties
//!   → Selector::select     largest interior-disjoint subset, capped by agents
//! ```
//!
//! Both searches are exponential in the worst case and are guarded by
//! [`af_core::SearchLimits`].

pub mod enumerate;
pub mod error;
pub mod path;
pub mod select;


pub use enumerate::{enumerate_paths, sort_by_length};
pub use error::{PathError, PathResult};
pub use path::{Path, PathSet, RoomSet};
pub use select::{BranchAndBound, Selector};

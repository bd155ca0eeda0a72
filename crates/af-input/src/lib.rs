//! `af-input`: farm description parsing.
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`farm`]   | `Farm`: parsed description, `to_graph`           |
//! | [`loader`] | `parse_farm`, `load_farm`, `load_farm_reader`    |
//! | [`error`]  | `InputError`, `InputResult<T>`                   |
//!
//! Structural checks that need the full room table (unknown tunnel
//! endpoints, self-referencing tunnels) are left to
//! [`af_graph::GraphBuilder`]; this crate rejects what is malformed line by
//! line.

pub mod error;
pub mod farm;
pub mod loader;


pub use error::{InputError, InputResult};
pub use farm::Farm;
pub use loader::{load_farm, load_farm_reader, parse_farm};

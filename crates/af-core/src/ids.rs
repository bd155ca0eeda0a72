//! Strongly typed identifier wrappers.
//!
//! Room names are resolved to a `RoomId` once, when the graph is built; every
//! later stage works on the integer id and only the emitter maps back to names.
//! The inner integer is `pub` so ids can be built in tests without ceremony,
//! but table lookups go through `.index()` and new ids are minted with the
//! checked `TryFrom<usize>`.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Declare a `Copy` newtype over `u32` that indexes a dense table.
///
/// `$tag` prefixes the `Display` form, e.g. `r3` for `RoomId(3)`.  `u32::MAX`
/// is reserved for `INVALID`, so a table holds at most `u32::MAX` entries.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident = $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Placeholder for an id that was never assigned.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl TryFrom<usize> for $name {
            type Error = CoreError;

            /// Checked conversion from a table position.  Fails for
            /// positions that do not fit in `u32` or collide with `INVALID`.
            fn try_from(i: usize) -> CoreResult<Self> {
                match u32::try_from(i) {
                    Ok(n) if n != u32::MAX => Ok($name(n)),
                    _ => Err(CoreError::IdOutOfRange { kind: stringify!($name), index: i }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!($tag, "{}"), self.0)
                } else {
                    write!(f, concat!($tag, "?"))
                }
            }
        }
    };
}

typed_id! {
    /// Index of a room in the graph's room table, in insertion order.
    pub struct RoomId = "r";
}

typed_id! {
    /// 0-based index of an agent.  The agent at index `i` is announced on the
    /// wire as agent `i + 1`; see [`AgentId::number`].
    pub struct AgentId = "a";
}

impl AgentId {
    /// The 1-based agent number used in move notation (`L<number>-<room>`).
    #[inline]
    pub fn number(self) -> u64 {
        u64::from(self.0) + 1
    }
}

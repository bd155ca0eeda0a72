//! Run configuration.
//!
//! Path enumeration and disjoint-set selection are both exponential in the
//! worst case.  `SearchLimits` puts a ceiling on each so a pathological input
//! fails with an error instead of running indefinitely.

use crate::{CoreError, CoreResult};

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Upper bounds on the two exhaustive searches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    /// Maximum number of simple paths the enumerator may record.
    pub max_paths: usize,

    /// Maximum number of branch-and-bound nodes the selector may expand.
    pub max_selection_steps: u64,
}

impl SearchLimits {
    pub const DEFAULT_MAX_PATHS: usize = 100_000;
    pub const DEFAULT_MAX_SELECTION_STEPS: u64 = 10_000_000;

    /// No practical limit.  Intended for tests over tiny graphs.
    pub fn unbounded() -> Self {
        Self { max_paths: usize::MAX, max_selection_steps: u64::MAX }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_paths:           Self::DEFAULT_MAX_PATHS,
            max_selection_steps: Self::DEFAULT_MAX_SELECTION_STEPS,
        }
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one routing run.
///
/// Typically built from defaults, optionally overlaid with a TOML file and
/// command-line flags by the application crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    pub limits: SearchLimits,

    /// Abort the schedule after this many turns.  `None` leaves the scheduler
    /// bounded only by `longest path + agent count`.
    pub max_turns: Option<u64>,
}

impl RunConfig {
    /// Reject settings that would make every run fail immediately.
    pub fn validate(&self) -> CoreResult<()> {
        if self.limits.max_paths == 0 {
            return Err(CoreError::Config("limits.max_paths must be at least 1".into()));
        }
        if self.limits.max_selection_steps == 0 {
            return Err(CoreError::Config(
                "limits.max_selection_steps must be at least 1".into(),
            ));
        }
        if self.max_turns == Some(0) {
            return Err(CoreError::Config("max_turns must be at least 1".into()));
        }
        Ok(())
    }
}

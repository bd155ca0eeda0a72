//! Room-disjoint path selection.
//!
//! # Pluggability
//!
//! The pipeline calls selection through the [`Selector`] trait, so a caller
//! can substitute a flow-based or greedy strategy without touching the
//! scheduler.  The default [`BranchAndBound`] is exact for cardinality.
//!
//! # Tie-breaking
//!
//! Candidates arrive sorted by length.  Among all disjoint subsets of the
//! largest achievable size (capped), `BranchAndBound` returns the one that is
//! lexicographically first by candidate index, i.e. the one built from the
//! shortest and earliest-discovered paths.  This does not guarantee the
//! fewest turns; it is a heuristic.

use tracing::debug;

use af_core::SearchLimits;

use crate::{Path, PathError, PathResult, PathSet, RoomSet};

// ── Selector trait ────────────────────────────────────────────────────────────

/// Pluggable disjoint-path selection strategy.
pub trait Selector {
    /// Choose a set of pairwise interior-disjoint paths from `candidates`.
    ///
    /// `cap` bounds the result size (normally the agent count: more corridors
    /// than agents are useless).  An empty result means no candidates.
    fn select(
        &self,
        candidates: &[Path],
        cap:        Option<usize>,
        limits:     &SearchLimits,
    ) -> PathResult<PathSet>;
}

// ── BranchAndBound ────────────────────────────────────────────────────────────

/// Exhaustive branch-and-bound over candidate indices.
///
/// At each level it tries every later candidate whose interior misses the
/// claimed rooms, recursing with those rooms added.  A branch is abandoned
/// once the remaining candidates could not beat the best set found at that
/// level, or once the cap is reached.
pub struct BranchAndBound;

impl Selector for BranchAndBound {
    fn select(
        &self,
        candidates: &[Path],
        cap:        Option<usize>,
        limits:     &SearchLimits,
    ) -> PathResult<PathSet> {
        let mut search = Search {
            candidates,
            steps:  0,
            budget: limits.max_selection_steps,
        };
        let cap = cap.unwrap_or(usize::MAX);
        let chosen = search.best_from(0, &RoomSet::new(), cap)?;

        debug!(
            candidates = candidates.len(),
            selected = chosen.len(),
            steps = search.steps,
            "selected disjoint paths",
        );

        let paths = chosen.into_iter().map(|i| candidates[i].clone()).collect();
        Ok(PathSet::from_disjoint(paths))
    }
}

struct Search<'a> {
    candidates: &'a [Path],
    steps:      u64,
    budget:     u64,
}

impl Search<'_> {
    /// Best extension using candidates `from..`, given `claimed` rooms and at
    /// most `slots` more paths.  Returns candidate indices, ascending.
    fn best_from(
        &mut self,
        from:      usize,
        claimed:   &RoomSet,
        slots:     usize,
    ) -> PathResult<Vec<usize>> {
        let mut best: Vec<usize> = Vec::new();
        if slots == 0 {
            return Ok(best);
        }

        let n = self.candidates.len();
        for i in from..n {
            // Even taking every remaining candidate would only tie.
            if n - i <= best.len() {
                break;
            }
            let interior = self.candidates[i].interior();
            if claimed.intersects(interior) {
                continue;
            }
            self.step()?;

            let mut chosen = vec![i];
            chosen.extend(self.best_from(i + 1, &claimed.with(interior), slots - 1)?);
            if chosen.len() > best.len() {
                best = chosen;
                if best.len() == slots {
                    break;
                }
            }
        }
        Ok(best)
    }

    fn step(&mut self) -> PathResult<()> {
        self.steps += 1;
        if self.steps > self.budget {
            return Err(PathError::SelectionBudgetExceeded { budget: self.budget });
        }
        Ok(())
    }
}

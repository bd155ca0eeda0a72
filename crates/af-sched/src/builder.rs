//! Builder for constructing a [`Scheduler`].

use af_path::PathSet;

use crate::{Scheduler, SimError, SimResult};

/// Fluent builder for [`Scheduler`].
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = SchedulerBuilder::new(paths, 4)
///     .max_turns(Some(1_000))
///     .build()?;
/// let log = scheduler.run(&mut NoopObserver)?;
/// ```
pub struct SchedulerBuilder {
    paths:       PathSet,
    agent_count: u32,
    max_turns:   Option<u64>,
}

impl SchedulerBuilder {
    pub fn new(paths: PathSet, agent_count: u32) -> Self {
        Self { paths, agent_count, max_turns: None }
    }

    /// Abort the run after `limit` turns.  `None` (the default) uses the
    /// scheduler's own bound.
    pub fn max_turns(mut self, limit: Option<u64>) -> Self {
        self.max_turns = limit;
        self
    }

    /// Validate inputs and return a ready-to-run [`Scheduler`].
    pub fn build(self) -> SimResult<Scheduler> {
        if self.paths.is_empty() {
            return Err(SimError::NoPaths);
        }
        if self.agent_count == 0 {
            return Err(SimError::NoAgents);
        }
        Ok(Scheduler {
            paths:       self.paths,
            agent_count: self.agent_count,
            max_turns:   self.max_turns,
        })
    }
}

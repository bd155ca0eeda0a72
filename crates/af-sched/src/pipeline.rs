//! End-to-end pipeline: enumerate → sort → select → schedule.

use tracing::{debug, info_span};

use af_core::RunConfig;
use af_graph::Graph;
use af_path::{BranchAndBound, PathError, PathSet, Selector, enumerate_paths, sort_by_length};

use crate::{PipelineResult, SchedulerBuilder, TurnLog, TurnObserver};

/// The outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Paths actually used, in selection order (path `i` is agent `i mod k`'s).
    pub paths: PathSet,
    pub log:   TurnLog,
}

/// Route `agent_count` agents through `graph` with the default
/// [`BranchAndBound`] selector.
pub fn solve<O: TurnObserver>(
    graph:       &Graph,
    agent_count: u32,
    config:      &RunConfig,
    observer:    &mut O,
) -> PipelineResult<Plan> {
    solve_with(&BranchAndBound, graph, agent_count, config, observer)
}

/// Like [`solve`] with a caller-supplied [`Selector`].
///
/// Fails with [`PathError::NoPath`] when `end` is unreachable from `start`.
pub fn solve_with<S: Selector, O: TurnObserver>(
    selector:    &S,
    graph:       &Graph,
    agent_count: u32,
    config:      &RunConfig,
    observer:    &mut O,
) -> PipelineResult<Plan> {
    let _span = info_span!("solve", rooms = graph.room_count(), agents = agent_count).entered();
    config.validate()?;

    let mut candidates = enumerate_paths(graph, &config.limits)?;
    sort_by_length(&mut candidates);

    let paths = selector.select(&candidates, Some(agent_count as usize), &config.limits)?;
    if paths.is_empty() {
        return Err(PathError::NoPath {
            start: graph.name(graph.start()).to_owned(),
            end:   graph.name(graph.end()).to_owned(),
        }
        .into());
    }
    for (i, p) in paths.iter().enumerate() {
        debug!(index = i, len = p.len(), path = %p.display(graph), "using path");
    }

    let scheduler = SchedulerBuilder::new(paths, agent_count)
        .max_turns(config.max_turns)
        .build()?;
    let log = scheduler.run(observer)?;

    Ok(Plan { paths: scheduler.paths, log })
}

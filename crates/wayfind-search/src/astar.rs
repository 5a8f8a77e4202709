use wayfind_model::AstarGraph;

use crate::config::Relaxation;
use crate::context::Context;
use crate::error::SearchError;
use crate::path::{Path, SearchOutcome};
use crate::pathfinder::{NO_PARENT, NodeStatus, Pathfinder};

/// Slack allowed when comparing heuristic values against edge costs.
const HEURISTIC_EPSILON: f64 = 1e-9;

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Start node queued, nothing expanded yet.
    Initialized,
    /// At least one node expanded, goal not reached.
    Running,
    /// Goal expanded; the path is available.
    Succeeded,
    /// Open set exhausted without reaching the goal.
    Failed,
}

impl SearchState {
    /// Whether the run has reached an outcome.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// An in-progress A* run over `G`, created by [`Pathfinder::search`].
///
/// Each [`step`](Self::step) expands exactly one node, so a host can
/// inspect [`status`](Self::status) between steps to draw the frontier.
pub struct Search<'a, G: AstarGraph> {
    finder: &'a mut Pathfinder,
    graph: &'a G,
    start_idx: usize,
    goal_idx: usize,
    goal: G::Node,
    state: SearchState,
    ctx: Option<Context>,
    nbuf: Vec<(G::Node, f64)>,
}

impl<'a, G: AstarGraph> Search<'a, G> {
    pub(crate) fn new(
        finder: &'a mut Pathfinder,
        graph: &'a G,
        start_idx: usize,
        goal_idx: usize,
        goal: G::Node,
    ) -> Self {
        Self {
            finder,
            graph,
            start_idx,
            goal_idx,
            goal,
            state: SearchState::Initialized,
            ctx: None,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Abort the run with [`SearchError::Cancelled`] once `ctx` is cancelled.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes expanded so far.
    pub fn steps(&self) -> usize {
        self.finder.stats.expanded
    }

    /// Status of `node` in this run.
    pub fn status(&self, node: G::Node) -> NodeStatus {
        self.finder.status(self.graph, node)
    }

    /// Expand one node.
    ///
    /// Once the run has finished, further calls return the final state
    /// without doing any work.
    pub fn step(&mut self) -> Result<SearchState, SearchError> {
        if self.state.is_finished() {
            return Ok(self.state);
        }
        if self.ctx.as_ref().is_some_and(Context::is_done) {
            log::warn!("astar: cancelled after {} expansions", self.steps());
            return Err(SearchError::Cancelled);
        }
        if let Some(max) = self.finder.config.max_steps {
            if self.steps() >= max {
                log::warn!("astar: step budget of {max} exhausted");
                return Err(SearchError::BudgetExhausted { steps: max });
            }
        }

        let cur_gen = self.finder.generation;
        let ci = loop {
            let Some(current) = self.finder.open.pop() else {
                self.state = SearchState::Failed;
                log::debug!(
                    "astar: no path to {:?} after {} expansions",
                    self.goal,
                    self.steps()
                );
                return Ok(self.state);
            };
            let n = &self.finder.nodes[current.idx];
            // Skip entries superseded by a relaxation or already closed.
            if n.generation == cur_gen && n.status == NodeStatus::Open {
                break current.idx;
            }
        };

        self.state = SearchState::Running;
        self.finder.nodes[ci].status = NodeStatus::Closed;
        self.finder.stats.expanded += 1;

        if ci == self.goal_idx {
            self.state = SearchState::Succeeded;
            self.check_start_estimate();
            log::debug!(
                "astar: reached {:?} at cost {} after {} expansions ({} still open)",
                self.goal,
                self.finder.nodes[ci].g,
                self.steps(),
                self.finder.open.len()
            );
            return Ok(self.state);
        }

        self.expand(ci);
        Ok(self.state)
    }

    /// Step until the run finishes and return its outcome.
    pub fn run(mut self) -> Result<SearchOutcome<G::Node>, SearchError> {
        loop {
            match self.step()? {
                SearchState::Succeeded => {
                    let path = self.reconstruct();
                    return Ok(SearchOutcome::Found(path));
                }
                SearchState::Failed => return Ok(SearchOutcome::NoPathFound),
                SearchState::Initialized | SearchState::Running => {}
            }
        }
    }

    /// The path, once the run has succeeded.
    pub fn path(&self) -> Option<Path<G::Node>> {
        (self.state == SearchState::Succeeded).then(|| self.reconstruct())
    }

    fn expand(&mut self, ci: usize) {
        let graph = self.graph;
        let goal = self.goal;
        let config = self.finder.config;
        let cur_gen = self.finder.generation;
        let current = graph.node(ci);
        let current_g = self.finder.nodes[ci].g;
        let current_h = self.finder.nodes[ci].h;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        graph.neighbors(current, &mut nbuf);

        for &(np, cost) in nbuf.iter() {
            let Some(ni) = graph.index(np) else {
                continue;
            };
            if !graph.is_passable(np) {
                continue;
            }
            let tentative_g = current_g + cost;

            let finder = &mut *self.finder;
            let n = &mut finder.nodes[ni];
            let seen = n.generation == cur_gen;
            let h = if seen { n.h } else { graph.estimate(np, goal) };
            if config.check_heuristic && current_h > cost + h + HEURISTIC_EPSILON {
                log::warn!(
                    "astar: inconsistent heuristic on edge {current:?} -> {np:?}: \
                     h={current_h} > cost {cost} + h={h}"
                );
                finder.stats.heuristic_violations += 1;
            }

            if seen {
                match n.status {
                    NodeStatus::Closed => continue,
                    NodeStatus::Open => {
                        if config.relaxation == Relaxation::FirstDiscovery || tentative_g >= n.g {
                            continue;
                        }
                        log::trace!("astar: relax {np:?} {} -> {tentative_g}", n.g);
                        n.g = tentative_g;
                        n.parent = ci;
                        finder.stats.relaxed += 1;
                        let f = n.f();
                        finder.open.push(ni, f);
                        continue;
                    }
                    NodeStatus::Unvisited => {}
                }
            }

            n.generation = cur_gen;
            n.g = tentative_g;
            n.h = h;
            n.parent = ci;
            n.status = NodeStatus::Open;
            finder.stats.discovered += 1;
            finder.open.push(ni, tentative_g + h);
        }

        self.nbuf = nbuf;
    }

    /// An admissible heuristic never estimates more than the real cost from
    /// the start.
    fn check_start_estimate(&mut self) {
        if !self.finder.config.check_heuristic {
            return;
        }
        let h = self.finder.nodes[self.start_idx].h;
        let g = self.finder.nodes[self.goal_idx].g;
        if h > g + HEURISTIC_EPSILON {
            log::warn!("astar: heuristic overestimates: h(start)={h} > path cost {g}");
            self.finder.stats.heuristic_violations += 1;
        }
    }

    fn reconstruct(&self) -> Path<G::Node> {
        let graph = self.graph;
        let mut nodes = Vec::new();
        let mut ci = self.goal_idx;
        while ci != NO_PARENT {
            nodes.push(graph.node(ci));
            ci = self.finder.nodes[ci].parent;
        }
        nodes.reverse();

        let distance: f64 = nodes
            .windows(2)
            .map(|w| graph.distance(w[0], w[1]))
            .sum::<f64>()
            * graph.metric_scale();
        Path::new(nodes, self.finder.nodes[self.goal_idx].g, distance)
    }
}

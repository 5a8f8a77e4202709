use wayfind_model::{AstarGraph, Graph};

use crate::astar::Search;
use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError};
use crate::open::OpenSet;
use crate::path::SearchOutcome;

/// Search status of a node within the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Counters for the last run of a [`Pathfinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes moved from Open to Closed.
    pub expanded: usize,
    /// Nodes seen for the first time, start included.
    pub discovered: usize,
    /// Open nodes whose cost was lowered by a cheaper route.
    pub relaxed: usize,
    /// Edges or endpoints where the heuristic was found to overestimate.
    /// Only counted with [`SearchConfig::check_heuristic`].
    pub heuristic_violations: usize,
}

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-run node metadata
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) status: NodeStatus,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            status: NodeStatus::Unvisited,
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable A* engine.
///
/// `Pathfinder` owns the node metadata table and the open set, so repeated
/// searches incur no allocations once the table has grown to the largest
/// model searched. Searches borrow the model immutably: several
/// `Pathfinder`s may search one model at the same time.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: OpenSet,
    pub(crate) stats: SearchStats,
}

impl Pathfinder {
    /// Create a pathfinder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration used by subsequent runs.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the last run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute the shortest path from `start` to `goal` with A*.
    ///
    /// Returns [`SearchOutcome::NoPathFound`] when the goal is unreachable.
    /// Errors only on invalid endpoints, an exhausted step budget, or
    /// cancellation.
    pub fn astar_path<G: AstarGraph>(
        &mut self,
        graph: &G,
        start: G::Node,
        goal: G::Node,
    ) -> Result<SearchOutcome<G::Node>, SearchError> {
        self.search(graph, start, goal)?.run()
    }

    /// Initialise a run without expanding anything yet.
    ///
    /// The returned [`Search`] is in [`SearchState::Initialized`](crate::SearchState)
    /// with the start node as the only open node.
    pub fn search<'a, G: AstarGraph>(
        &'a mut self,
        graph: &'a G,
        start: G::Node,
        goal: G::Node,
    ) -> Result<Search<'a, G>, SearchError> {
        let start_idx = resolve(graph, start, Endpoint::Start)?;
        let goal_idx = resolve(graph, goal, Endpoint::Goal)?;

        self.begin_run(graph.node_count());
        let cur_gen = self.generation;

        let h = graph.estimate(start, goal);
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.h = h;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.status = NodeStatus::Open;
        }
        self.open.push(start_idx, h);
        self.stats.discovered = 1;

        log::debug!("astar: searching {start:?} -> {goal:?}, estimate {h}");
        Ok(Search::new(self, graph, start_idx, goal_idx, goal))
    }

    /// Status of `node` in the last run. Nodes the run never reached, and
    /// nodes outside the model, are [`NodeStatus::Unvisited`].
    pub fn status<G: Graph>(&self, graph: &G, node: G::Node) -> NodeStatus {
        self.meta(graph, node)
            .map_or(NodeStatus::Unvisited, |n| n.status)
    }

    /// Best known cost from the start to `node` in the last run.
    pub fn g_cost<G: Graph>(&self, graph: &G, node: G::Node) -> Option<f64> {
        self.meta(graph, node).map(|n| n.g)
    }

    fn meta<G: Graph>(&self, graph: &G, node: G::Node) -> Option<&Node> {
        let idx = graph.index(node)?;
        self.nodes
            .get(idx)
            .filter(|n| n.generation == self.generation && n.status != NodeStatus::Unvisited)
    }

    /// Bump the generation so every stored node reads as unvisited, and make
    /// room for `len` nodes.
    fn begin_run(&mut self, len: usize) {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stamps from 2^32 runs ago would look current.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.open.reset(self.config.tie_break);
        self.stats = SearchStats::default();
    }
}

fn resolve<G: Graph>(graph: &G, node: G::Node, which: Endpoint) -> Result<usize, SearchError> {
    match graph.index(node) {
        Some(idx) if graph.is_passable(node) => Ok(idx),
        _ => Err(SearchError::InvalidEndpoint {
            which,
            node: format!("{node:?}"),
        }),
    }
}

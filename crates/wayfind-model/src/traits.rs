use std::fmt::Debug;

/// Minimal graph interface: node identity and neighbor enumeration.
///
/// Every node maps to a dense index in `0..node_count()`, which the search
/// engine uses to key its per-run metadata table.
pub trait Graph {
    /// Node identity handed to and returned from searches.
    type Node: Copy + Eq + Debug;

    /// Number of index slots. Indices are in `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Dense index of `node`, or `None` if the node is not part of the model.
    fn index(&self, node: Self::Node) -> Option<usize>;

    /// Node stored at `index`. `index` must be below [`node_count`](Self::node_count).
    fn node(&self, index: usize) -> Self::Node;

    /// Whether a search may enter `node`.
    fn is_passable(&self, node: Self::Node) -> bool;

    /// Append the passable neighbors of `node` with their edge costs into
    /// `buf`, in a deterministic order. The caller clears `buf` before calling.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<(Self::Node, f64)>);
}

/// Graph with a distance metric between any two nodes.
pub trait MetricGraph: Graph {
    /// Distance between `a` and `b`. Must be >= 0.
    fn distance(&self, a: Self::Node, b: Self::Node) -> f64;

    /// Factor converting model distances into reported units.
    fn metric_scale(&self) -> f64 {
        1.0
    }
}

/// Full A* graph with an admissible heuristic.
pub trait AstarGraph: MetricGraph {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Self::Node, to: Self::Node) -> f64 {
        self.distance(from, to)
    }
}

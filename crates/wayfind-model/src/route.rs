//! A street-map graph: positioned nodes joined by undirected ways.

use std::fmt;

use wayfind_core::{euclidean, Coord};

use crate::traits::{AstarGraph, Graph, MetricGraph};

/// Dense identifier of a [`RouteModel`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Road graph in normalised map space.
///
/// Edge costs and the heuristic are both the Euclidean distance between
/// node coordinates. Reported distances are multiplied by the metric scale,
/// which converts map units into metres.
#[derive(Debug, Clone)]
pub struct RouteModel {
    coords: Vec<Coord>,
    adjacency: Vec<Vec<usize>>,
    metric_scale: f64,
    path: Vec<NodeId>,
}

impl Default for RouteModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteModel {
    pub fn new() -> Self {
        Self {
            coords: Vec::new(),
            adjacency: Vec::new(),
            metric_scale: 1.0,
            path: Vec::new(),
        }
    }

    /// Set the number of metres per map unit.
    pub fn with_metric_scale(mut self, scale: f64) -> Self {
        self.metric_scale = scale;
        self
    }

    /// Add an unconnected node and return its id.
    pub fn add_node(&mut self, coord: Coord) -> NodeId {
        self.coords.push(coord);
        self.adjacency.push(Vec::new());
        NodeId(self.coords.len() - 1)
    }

    /// Connect consecutive nodes of `way` with undirected edges.
    ///
    /// Duplicate edges are ignored so that overlapping ways do not produce
    /// repeated neighbors.
    pub fn add_way(&mut self, way: &[NodeId]) -> Result<(), RouteModelError> {
        if way.len() < 2 {
            return Err(RouteModelError::DegenerateWay { len: way.len() });
        }
        if let Some(&id) = way.iter().find(|id| id.0 >= self.coords.len()) {
            return Err(RouteModelError::UnknownNode(id));
        }
        for pair in way.windows(2) {
            let (a, b) = (pair[0].0, pair[1].0);
            if a == b {
                continue;
            }
            if !self.adjacency[a].contains(&b) {
                self.adjacency[a].push(b);
                self.adjacency[b].push(a);
            }
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinate of a node, or `None` for unknown ids.
    pub fn coord(&self, id: NodeId) -> Option<Coord> {
        self.coords.get(id.0).copied()
    }

    /// Whether the node belongs to at least one way.
    pub fn is_on_road(&self, id: NodeId) -> bool {
        self.adjacency.get(id.0).is_some_and(|adj| !adj.is_empty())
    }

    /// Nearest road node to `coord`. Nodes outside every way are never
    /// returned. Ties go to the lower id.
    pub fn closest_node(&self, coord: Coord) -> Option<NodeId> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &c) in self.coords.iter().enumerate() {
            if self.adjacency[i].is_empty() {
                continue;
            }
            let d = euclidean(c, coord);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| NodeId(i))
    }

    /// Store the last planned route for display.
    pub fn set_path(&mut self, path: &[NodeId]) {
        self.path.clear();
        self.path.extend_from_slice(path);
    }

    /// The last stored route.
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }
}

impl Graph for RouteModel {
    type Node = NodeId;

    fn node_count(&self) -> usize {
        self.coords.len()
    }

    fn index(&self, node: NodeId) -> Option<usize> {
        (node.0 < self.coords.len()).then_some(node.0)
    }

    fn node(&self, index: usize) -> NodeId {
        NodeId(index)
    }

    fn is_passable(&self, node: NodeId) -> bool {
        node.0 < self.coords.len()
    }

    fn neighbors(&self, node: NodeId, buf: &mut Vec<(NodeId, f64)>) {
        let Some(adj) = self.adjacency.get(node.0) else {
            return;
        };
        let from = self.coords[node.0];
        for &n in adj {
            buf.push((NodeId(n), euclidean(from, self.coords[n])));
        }
    }
}

impl MetricGraph for RouteModel {
    /// Straight-line distance in model units. Infinite when either node is
    /// not in the model.
    fn distance(&self, a: NodeId, b: NodeId) -> f64 {
        match (self.coord(a), self.coord(b)) {
            (Some(x), Some(y)) => euclidean(x, y),
            _ => f64::INFINITY,
        }
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}

impl AstarGraph for RouteModel {}

/// Errors that can occur when building a route model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteModelError {
    /// A way refers to a node that was never added.
    UnknownNode(NodeId),
    /// A way needs at least two nodes.
    DegenerateWay { len: usize },
}

impl fmt::Display for RouteModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "route model: unknown node {id}"),
            Self::DegenerateWay { len } => {
                write!(f, "route model: way with {len} node(s), need at least 2")
            }
        }
    }
}

impl std::error::Error for RouteModelError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let json = serde_json::to_string(&NodeId(7)).unwrap();
        assert_eq!(json, "7");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId(7));
    }
}

/// A start-to-goal route found by a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
    distance: f64,
}

impl<N> Path<N> {
    pub(crate) fn new(nodes: Vec<N>, cost: f64, distance: f64) -> Self {
        Self {
            nodes,
            cost,
            distance,
        }
    }

    /// Nodes from start to goal, both included.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Number of edges walked (one less than the number of nodes).
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Accumulated edge cost of the goal node.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Sum of model distances between consecutive nodes, multiplied by the
    /// model's metric scale.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<N> {
    Found(Path<N>),
    /// The open set ran empty before the goal was reached.
    NoPathFound,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPathFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPathFound => None,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayfind_core::Point;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(1, 0)], 1.0, 1.0);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}

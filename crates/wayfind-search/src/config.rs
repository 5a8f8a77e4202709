/// Order in which equal-`f` open entries are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// The most recently inserted entry wins. Along a single expansion this
    /// favours the last neighbor in the model's neighbor order.
    #[default]
    LastInserted,
    /// The earliest inserted entry wins.
    FirstInserted,
}

/// What happens when a cheaper route to an already-open node is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Update cost and parent and re-queue the node. Optimal on any graph
    /// with non-negative edge costs and a consistent heuristic.
    #[default]
    Full,
    /// Keep the first cost found for every node. Only optimal when all edge
    /// costs are equal.
    FirstDiscovery,
}

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub tie_break: TieBreak,
    pub relaxation: Relaxation,
    /// Maximum number of node expansions per run. `None` means unbounded.
    pub max_steps: Option<usize>,
    /// Check `h(current) <= cost + h(neighbor)` on every edge and report
    /// violations through the log and [`SearchStats`](crate::SearchStats).
    pub check_heuristic: bool,
}

impl SearchConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_heuristic_check(mut self, enabled: bool) -> Self {
        self.check_heuristic = enabled;
        self
    }
}

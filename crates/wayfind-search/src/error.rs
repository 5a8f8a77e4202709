use std::fmt;

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that stop a search before it reaches an outcome.
///
/// An exhausted open set is not an error: it is reported as
/// [`SearchOutcome::NoPathFound`](crate::SearchOutcome::NoPathFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal is outside the model or impassable.
    InvalidEndpoint { which: Endpoint, node: String },
    /// The configured expansion budget ran out.
    BudgetExhausted { steps: usize },
    /// The run's [`Context`](crate::Context) was cancelled.
    Cancelled,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { which, node } => {
                write!(f, "search: {which} node {node} is not a passable node of the model")
            }
            Self::BudgetExhausted { steps } => {
                write!(f, "search: step budget exhausted after {steps} expansions")
            }
            Self::Cancelled => f.write_str("search: cancelled"),
        }
    }
}

impl std::error::Error for SearchError {}

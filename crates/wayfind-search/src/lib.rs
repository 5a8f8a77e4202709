//! A* shortest-path search over [`wayfind_model`] graphs.
//!
//! A [`Pathfinder`] owns the per-run node metadata (costs, status, parent
//! indices) in a flat table keyed by the model's dense node indices, so the
//! model itself stays immutable and can be shared between searches.
//! Metadata is invalidated lazily with a generation stamp: repeated runs
//! allocate nothing after warm-up.
//!
//! - [`Pathfinder::astar_path`]: run a search to completion.
//! - [`Pathfinder::search`]: drive a run one expansion at a time with
//!   [`Search::step`], for hosts that visualise progress.
//! - [`RoutePlanner`]: percentage-coordinate route queries on a
//!   [`RouteModel`](wayfind_model::RouteModel).
//!
//! "No path" is an ordinary [`SearchOutcome`], not an error.

mod astar;
mod config;
mod context;
mod error;
mod open;
mod path;
mod pathfinder;
mod route;

pub use astar::{Search, SearchState};
pub use config::{Relaxation, SearchConfig, TieBreak};
pub use context::Context;
pub use error::{Endpoint, SearchError};
pub use path::{Path, SearchOutcome};
pub use pathfinder::{NodeStatus, Pathfinder, SearchStats};
pub use route::{Route, RoutePlanner};

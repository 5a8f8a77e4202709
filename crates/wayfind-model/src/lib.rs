//! Graph models consumed by the wayfind search engine.
//!
//! The engine only ever sees a model through the trait hierarchy below;
//! the two concrete models are what hosts usually build:
//!
//! - [`Board`]: a bounded grid of empty/obstacle tiles with 4-way movement.
//! - [`RouteModel`]: a street-map graph of positioned nodes joined by ways.
//!
//! # Trait hierarchy
//!
//! | Trait | Adds |
//! |---|---|
//! | [`Graph`] | node identity, dense indexing, neighbor enumeration |
//! | [`MetricGraph`] : [`Graph`] | distance metric and unit scale |
//! | [`AstarGraph`] : [`MetricGraph`] | admissible heuristic |

mod board;
mod route;
mod traits;

pub use board::{Board, BoardError, Mark, Tile};
pub use route::{NodeId, RouteModel, RouteModelError};
pub use traits::{AstarGraph, Graph, MetricGraph};

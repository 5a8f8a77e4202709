//! **wayfind-core** — geometry primitives shared by the wayfind graph models
//! and the search engine.
//!
//! - [`Point`] / [`Range`]: integer grid coordinates and half-open rectangles.
//! - [`Coord`]: real-valued map coordinates for geometric graphs.
//! - [`manhattan`] / [`euclidean`]: the two metrics used as edge costs and
//!   heuristics.

pub mod distance;
pub mod geom;

pub use distance::{euclidean, manhattan};
pub use geom::{Coord, Point, Range, RangeIter};

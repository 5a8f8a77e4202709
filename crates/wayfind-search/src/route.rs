//! Route queries on a street-map [`RouteModel`].

use wayfind_core::Coord;
use wayfind_model::{NodeId, RouteModel};

use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError};
use crate::pathfinder::Pathfinder;

/// A planned route: road nodes from start to end and the length in metres.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub distance: f64,
}

/// Plans routes between map positions given as percentages of the map
/// extent (0–100 on each axis).
pub struct RoutePlanner<'a> {
    model: &'a RouteModel,
    finder: Pathfinder,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(model: &'a RouteModel) -> Self {
        Self::with_config(model, SearchConfig::default())
    }

    pub fn with_config(model: &'a RouteModel, config: SearchConfig) -> Self {
        Self {
            model,
            finder: Pathfinder::with_config(config),
        }
    }

    /// Snap both positions onto the closest road nodes and search between
    /// them. Returns `Ok(None)` when the two nodes are not connected.
    ///
    /// The planner only borrows the model, so the route is not stored on it.
    /// Hosts that display the route call [`RouteModel::set_path`] with
    /// [`Route::nodes`] once the planner is dropped.
    pub fn plan(&mut self, start_pct: Coord, end_pct: Coord) -> Result<Option<Route>, SearchError> {
        let start = self.snap(start_pct, Endpoint::Start)?;
        let end = self.snap(end_pct, Endpoint::Goal)?;
        log::debug!("route: {start_pct} -> {end_pct} snapped to {start} -> {end}");

        let outcome = self.finder.astar_path(self.model, start, end)?;
        Ok(outcome.into_path().map(|path| Route {
            distance: path.distance(),
            nodes: path.into_nodes(),
        }))
    }

    /// Counters of the last search.
    pub fn stats(&self) -> crate::SearchStats {
        self.finder.stats()
    }

    fn snap(&self, pct: Coord, which: Endpoint) -> Result<NodeId, SearchError> {
        self.model
            .closest_node(pct.scale(0.01))
            .ok_or_else(|| SearchError::InvalidEndpoint {
                which,
                node: pct.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two roads from west to east: a straight one along y = 0.5 that is
    /// interrupted, and a detour to the north.
    fn town() -> (RouteModel, Vec<NodeId>) {
        let mut m = RouteModel::new().with_metric_scale(1000.0);
        let ids: Vec<NodeId> = [
            (0.1, 0.5),
            (0.5, 0.5),
            (0.9, 0.5),
            (0.5, 0.1),
            (0.2, 0.9),
        ]
        .into_iter()
        .map(|(x, y)| m.add_node(Coord::new(x, y)))
        .collect();
        m.add_way(&[ids[0], ids[1], ids[2]]).unwrap();
        m.add_way(&[ids[0], ids[3], ids[2]]).unwrap();
        (m, ids)
    }

    #[test]
    fn plans_straight_road_in_metres() {
        let (m, ids) = town();
        let mut planner = RoutePlanner::new(&m);
        let route = planner
            .plan(Coord::new(10.0, 50.0), Coord::new(90.0, 50.0))
            .unwrap()
            .unwrap();
        assert_eq!(route.nodes, vec![ids[0], ids[1], ids[2]]);
        assert!((route.distance - 800.0).abs() < 1e-6);
        assert_eq!(planner.stats().expanded, 3);
    }

    #[test]
    fn snaps_to_closest_road_node() {
        let (m, ids) = town();
        let mut planner = RoutePlanner::new(&m);
        // Starts next to the unconnected node (0.2, 0.9); it must be ignored.
        let route = planner
            .plan(Coord::new(20.0, 88.0), Coord::new(52.0, 12.0))
            .unwrap()
            .unwrap();
        assert_eq!(route.nodes.first(), Some(&ids[0]));
        assert_eq!(route.nodes.last(), Some(&ids[3]));
    }

    #[test]
    fn host_stores_planned_route_on_model() {
        let (mut m, ids) = town();
        let route = {
            let mut planner = RoutePlanner::new(&m);
            planner
                .plan(Coord::new(10.0, 50.0), Coord::new(90.0, 50.0))
                .unwrap()
                .unwrap()
        };
        assert!(m.path().is_empty());
        m.set_path(&route.nodes);
        assert_eq!(m.path(), &[ids[0], ids[1], ids[2]]);
    }

    #[test]
    fn disconnected_roads_yield_none() {
        let (mut m, _) = town();
        let a = m.add_node(Coord::new(0.9, 0.95));
        let b = m.add_node(Coord::new(0.95, 0.95));
        m.add_way(&[a, b]).unwrap();
        let mut planner = RoutePlanner::new(&m);
        let route = planner
            .plan(Coord::new(10.0, 50.0), Coord::new(95.0, 95.0))
            .unwrap();
        assert_eq!(route, None);
    }

    #[test]
    fn empty_model_is_an_invalid_endpoint() {
        let m = RouteModel::new();
        let mut planner = RoutePlanner::new(&m);
        let err = planner
            .plan(Coord::new(0.0, 0.0), Coord::new(1.0, 1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoint {
                which: Endpoint::Start,
                ..
            }
        ));
    }
}

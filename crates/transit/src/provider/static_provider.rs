//! In-memory stop provider backed by a loaded dataset.
//!
//! Stores routes and stops in `Arc`s with an R-tree over stop positions
//! for spatial queries.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rstar::RTree;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::index::{to_tree_point, StopNode};
use crate::spatial::queries::{haversine_distance, meters_to_degrees_approx};

/// Latitudes beyond this are clamped when widening the search box, so
/// longitude degrees never shrink to zero near the poles
const MAX_SEARCH_LATITUDE: f64 = 89.0;

/// In-memory provider with spatial indexing
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone)]
pub struct StaticStopProvider {
    routes: Vec<Arc<Route>>,
    stops: Vec<Arc<Stop>>,

    route_map: HashMap<RouteIdentifier, Arc<Route>>,
    stop_map: HashMap<StopIdentifier, Arc<Stop>>,

    stop_tree: Arc<RTree<StopNode>>,
}

impl StaticStopProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::from_routes(Vec::new())
    }

    pub fn from_routes(routes: Vec<Route>) -> Self {
        let routes: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();

        let stops: Vec<Arc<Stop>> = routes
            .iter()
            .flat_map(|r| r.stops.iter().cloned().map(Arc::new))
            .collect();

        let route_map: HashMap<_, _> = routes
            .iter()
            .map(|r| (r.id.clone(), r.clone()))
            .collect();

        // First occurrence wins when routes share a stop id
        let mut stop_map = HashMap::new();
        for stop in &stops {
            stop_map.entry(stop.id.clone()).or_insert_with(|| stop.clone());
        }

        let stop_tree = RTree::bulk_load(stops.iter().cloned().map(StopNode::new).collect());

        log::debug!("Indexed {} stops across {} routes", stops.len(), routes.len());

        Self {
            routes,
            stops,
            route_map,
            stop_map,
            stop_tree: Arc::new(stop_tree),
        }
    }
}

impl Default for StaticStopProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StopProvider for StaticStopProvider {
    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<Route>> {
        self.route_map.get(id).cloned()
    }

    fn get_stop(&self, id: &StopIdentifier) -> Option<Arc<Stop>> {
        self.stop_map.get(id).cloned()
    }

    fn all_routes(&self) -> Vec<Arc<Route>> {
        self.routes.clone()
    }

    fn all_stops(&self) -> Vec<Arc<Stop>> {
        self.stops.clone()
    }

    fn stops_near(&self, origin: Coordinate, radius_m: f64) -> Vec<Arc<Stop>> {
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        // Degree radius wide enough for the longitude axis at this latitude
        let lat_scale = origin.latitude.abs().min(MAX_SEARCH_LATITUDE).to_radians().cos();
        let search_deg = meters_to_degrees_approx(radius_m) / lat_scale * 1.01;

        // The tree does not wrap at ±180°, so search boxes crossing the
        // antimeridian are repeated on the other side
        let mut centers = vec![origin];
        if origin.longitude + search_deg > 180.0 {
            centers.push(Coordinate::new(origin.latitude, origin.longitude - 360.0));
        }
        if origin.longitude - search_deg < -180.0 {
            centers.push(Coordinate::new(origin.latitude, origin.longitude + 360.0));
        }

        let tree = &self.stop_tree;
        let mut seen = HashSet::new();
        let mut found: Vec<(f64, Arc<Stop>)> = centers
            .into_iter()
            .flat_map(move |center| tree.locate_within_distance(to_tree_point(center), search_deg * search_deg))
            .filter(|node| seen.insert(Arc::as_ptr(&node.stop)))
            .map(|node| (haversine_distance(origin, node.stop.coordinate()), node.stop.clone()))
            .filter(|(d, _)| *d <= radius_m)
            .collect();
        found.sort_by(|a, b| a.0.total_cmp(&b.0));

        found.into_iter().map(|(_, stop)| stop).collect()
    }

    fn nearest_stops(&self, origin: Coordinate, n: usize) -> Vec<Arc<Stop>> {
        self.stop_tree
            .nearest_neighbor_iter(&to_tree_point(origin))
            .take(n)
            .map(|node| node.stop.clone())
            .collect()
    }
}

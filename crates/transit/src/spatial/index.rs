//! R-tree nodes for spatial indexing of stops.
//!
//! Nodes live in (longitude, latitude) degree space. Queries use the
//! tree as a coarse prefilter and apply haversine distances afterwards
//! where meters matter.

use std::sync::Arc;

use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::types::{Coordinate, Stop};

#[derive(Clone, Debug)]
pub struct StopNode {
    pub stop: Arc<Stop>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: Arc<Stop>) -> Self {
        let point = to_tree_point(stop.coordinate());
        Self { stop, point }
    }
}

/// Position of a coordinate in the tree's (lon, lat) space
pub fn to_tree_point(c: Coordinate) -> [f64; 2] {
    [c.longitude, c.latitude]
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

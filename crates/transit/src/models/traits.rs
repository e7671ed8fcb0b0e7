//! Traits at the seams of the proximity engine.
//!
//! `Located` lets ranking functions accept stops, references to stops or
//! caller-defined types. `StopProvider` is the lookup and spatial query
//! interface over a stop dataset. `LocationSource` stands in for the
//! platform location service.

use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Positions
// ============================================================================

/// Anything with a fixed position on the map
pub trait Located {
    fn location(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn location(&self) -> Coordinate {
        *self
    }
}

impl Located for Stop {
    fn location(&self) -> Coordinate {
        self.coordinate()
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Coordinate {
        (**self).location()
    }
}

impl<T: Located + ?Sized> Located for Arc<T> {
    fn location(&self) -> Coordinate {
        (**self).location()
    }
}

// ============================================================================
// Location Source
// ============================================================================

/// The best known user position, or `None` before the first fix.
///
/// Subscriptions, polling cadence and permissions live with the
/// implementor; the engine only reads a snapshot.
pub trait LocationSource {
    fn last_fix(&self) -> Option<Coordinate>;
}

impl LocationSource for Option<Coordinate> {
    fn last_fix(&self) -> Option<Coordinate> {
        *self
    }
}

impl LocationSource for Coordinate {
    fn last_fix(&self) -> Option<Coordinate> {
        Some(*self)
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Read-only access to a set of routes and their stops
pub trait StopProvider: Send + Sync {
    // ---- Lookups ----
    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<Route>>;

    /// First stop with this id, scanning routes in order
    fn get_stop(&self, id: &StopIdentifier) -> Option<Arc<Stop>>;

    // ---- Collections ----
    fn all_routes(&self) -> Vec<Arc<Route>>;

    /// Every stop, in route order then stop order
    fn all_stops(&self) -> Vec<Arc<Stop>>;

    // ---- Spatial queries ----

    /// Stops within `radius_m` meters (haversine), nearest first
    fn stops_near(&self, origin: Coordinate, radius_m: f64) -> Vec<Arc<Stop>>;

    /// The `n` nearest stops by planar degree distance
    fn nearest_stops(&self, origin: Coordinate, n: usize) -> Vec<Arc<Stop>>;

    fn route_or_err(&self, id: &RouteIdentifier) -> Result<Arc<Route>> {
        self.get_route(id)
            .ok_or_else(|| ProximityError::RouteNotFound(id.clone()))
    }

    fn stop_or_err(&self, id: &StopIdentifier) -> Result<Arc<Stop>> {
        self.get_stop(id)
            .ok_or_else(|| ProximityError::StopNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_located_impls() {
        let stop = Stop::new("s", "S", 1.0, 2.0);
        let shared = Arc::new(stop.clone());

        assert_eq!(stop.location(), Coordinate::new(1.0, 2.0));
        assert_eq!((&stop).location(), Coordinate::new(1.0, 2.0));
        assert_eq!(shared.location(), Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn test_location_sources() {
        let none: Option<Coordinate> = None;
        assert_eq!(none.last_fix(), None);
        assert_eq!(Coordinate::new(3.0, 4.0).last_fix(), Some(Coordinate::new(3.0, 4.0)));
    }
}

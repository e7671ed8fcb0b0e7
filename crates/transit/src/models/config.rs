//! Engine configuration.
//!
//! One config object replaces the per-variant code paths of the app:
//! which distance mode to rank with, which limit to filter by, and
//! which route to show.

use crate::identifiers::RouteIdentifier;
use crate::spatial::DistanceMode;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    pub mode: DistanceMode,
    /// Filter threshold in kilometers, `None` shows every stop
    pub limit_km: Option<f64>,
    /// Restrict the board to one route, `None` shows all routes
    pub route: Option<RouteIdentifier>,
}

impl EngineConfig {
    pub fn with_mode(mut self, mode: DistanceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_limit_km(mut self, limit_km: Option<f64>) -> Self {
        self.limit_km = limit_km;
        self
    }

    pub fn with_route(mut self, route: Option<RouteIdentifier>) -> Self {
        self.route = route;
        self
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::models::types::Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| crate::models::types::ProximityError::Serialization(e.to_string()))
    }
}

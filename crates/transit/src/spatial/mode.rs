//! Selectable distance strategies.

use std::fmt;

use crate::models::types::Coordinate;
use crate::spatial::queries::{degrees_to_km_approx, haversine_distance, planar_distance};

/// How distances are measured.
///
/// Radius checks need `Haversine` (absolute meters). List sorting only
/// needs relative order, which `Planar` gives cheaply for a city-sized
/// area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMode {
    /// Great-circle meters
    Haversine,
    /// Raw degree distance
    #[default]
    Planar,
}

impl DistanceMode {
    /// Distance in the mode's native unit (meters or degrees)
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Self::Haversine => haversine_distance(a, b),
            Self::Planar => planar_distance(a, b),
        }
    }

    /// Convert a native distance to kilometers
    pub fn to_km(self, raw: f64) -> f64 {
        match self {
            Self::Haversine => raw / 1000.0,
            Self::Planar => degrees_to_km_approx(raw),
        }
    }

    pub fn distance_km(self, a: Coordinate, b: Coordinate) -> f64 {
        self.to_km(self.distance(a, b))
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Haversine => write!(f, "haversine"),
            Self::Planar => write!(f, "planar"),
        }
    }
}

/// Distance between `a` and `b` under `mode`
pub fn distance(a: Coordinate, b: Coordinate, mode: DistanceMode) -> f64 {
    mode.distance(a, b)
}

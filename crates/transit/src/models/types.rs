//! Core data types for stops, routes and distance limits.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Coordinates
// ============================================================================

/// A WGS84 position in degrees.
///
/// Coordinates are never validated by the proximity functions; out of
/// range values produce meaningless (but non-panicking) distances.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point> for Coordinate {
    fn from(p: Point) -> Self {
        Self::new(p.y(), p.x())
    }
}

// ============================================================================
// Stops and Routes
// ============================================================================

/// A fixed point of interest, usually a bus stop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
    /// Proximity radius in meters
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub radius: Option<f64>,
}

impl Stop {
    pub fn new(id: impl Into<StopIdentifier>, name: impl AsRef<str>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            latitude,
            longitude,
            radius: None,
        }
    }

    pub fn with_radius(mut self, radius_m: f64) -> Self {
        self.radius = Some(radius_m);
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// An ordered group of stops. Order carries no distance meaning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteIdentifier,
    pub name: Arc<str>,
    pub stops: Vec<Stop>,
}

impl Route {
    pub fn new(id: impl Into<RouteIdentifier>, name: impl AsRef<str>, stops: Vec<Stop>) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            stops,
        }
    }
}

// ============================================================================
// Distance Limits
// ============================================================================

/// A selectable filter threshold. `value == None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceLimit {
    pub value: Option<f64>,
    pub label: &'static str,
}

impl DistanceLimit {
    pub const fn km(value: f64, label: &'static str) -> Self {
        Self { value: Some(value), label }
    }

    pub const fn unbounded(label: &'static str) -> Self {
        Self { value: None, label }
    }
}

/// The standard picker choices.
pub const DISTANCE_LIMITS: [DistanceLimit; 4] = [
    DistanceLimit::km(1.0, "1 km"),
    DistanceLimit::km(3.0, "3 km"),
    DistanceLimit::km(5.0, "5 km"),
    DistanceLimit::unbounded("Todas las paradas"),
];

/// Picker choices of the variant that also offers a 20 km radius.
pub const EXTENDED_DISTANCE_LIMITS: [DistanceLimit; 5] = [
    DistanceLimit::km(1.0, "1 km"),
    DistanceLimit::km(3.0, "3 km"),
    DistanceLimit::km(5.0, "5 km"),
    DistanceLimit::km(20.20, "20 km"),
    DistanceLimit::unbounded("Todas las paradas"),
];

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProximityError {
    #[error("No stops to choose from")]
    EmptyInput,

    #[error("Route not found: {0}")]
    RouteNotFound(RouteIdentifier),

    #[error("Stop not found: {0}")]
    StopNotFound(StopIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ProximityError>;

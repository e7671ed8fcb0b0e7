//! Distance calculations between coordinates.
//!
//! Haversine gives meters on a spherical Earth. The planar variant treats
//! raw degrees as Cartesian coordinates and is only meaningful over a
//! few tens of kilometers away from the poles.

use geo::{EuclideanDistance, Point};

use crate::models::types::Coordinate;

/// Mean Earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate kilometers per degree of latitude
pub const KM_PER_DEGREE: f64 = 111.32;

/// Great-circle distance in meters
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Euclidean distance between raw (lat, lon) pairs, in degrees
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    Point::from(a).euclidean_distance(&Point::from(b))
}

/// Convert degrees to approximate kilometers
pub fn degrees_to_km_approx(degrees: f64) -> f64 {
    degrees * KM_PER_DEGREE
}

/// Convert meters to degrees of latitude (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / (KM_PER_DEGREE * 1000.0)
}

//! Closest-stop selection and radius checks.

use crate::models::traits::Located;
use crate::models::types::{Coordinate, ProximityError, Result, Stop};
use crate::spatial::{haversine_distance, DistanceMode};

/// Whether `origin` lies within the stop's radius (inclusive).
///
/// Always measured in haversine meters. No fix, or a stop without a
/// radius, is never near.
pub fn is_near_stop(origin: Option<Coordinate>, stop: &Stop) -> bool {
    match (origin, stop.radius) {
        (Some(origin), Some(radius)) => haversine_distance(origin, stop.coordinate()) <= radius,
        _ => false,
    }
}

/// The stop at minimal distance from `origin`.
///
/// When several stops share the minimum the first one in `stops` wins.
/// Stops whose distance is NaN are only returned if nothing else is
/// comparable. Errors with [`ProximityError::EmptyInput`] on an empty
/// slice.
pub fn find_closest_stop<S: Located>(origin: Coordinate, stops: &[S], mode: DistanceMode) -> Result<&S> {
    closest_with_distance(origin, stops, mode).map(|(stop, _)| stop)
}

/// Like [`find_closest_stop`], also returning the distance in the mode's unit
pub fn closest_with_distance<S: Located>(
    origin: Coordinate,
    stops: &[S],
    mode: DistanceMode,
) -> Result<(&S, f64)> {
    let mut best: Option<(&S, f64)> = None;

    for stop in stops {
        let distance = mode.distance(origin, stop.location());
        match best {
            Some((_, min)) if !(distance < min || (min.is_nan() && !distance.is_nan())) => {}
            _ => best = Some((stop, distance)),
        }
    }

    best.ok_or(ProximityError::EmptyInput)
}

//! # parada-transit
//!
//! Find the bus stops around a user and rank them by distance.
//!
//! ## Features
//!
//! - **Two distance modes**: haversine meters for radius checks, planar
//!   degrees for cheap list ordering
//! - **Stable ranking**: equal distances keep dataset order
//! - **Limit filtering**: reuses the ranking distances, never recomputes
//! - **Spatial queries**: R-tree backed `stops_near` / `nearest_stops`
//! - **Datasets**: JSON route files, with the app's routes built in
//!
//! A missing location fix is never an error: rankings fall back to
//! dataset order and no stop is "near".
//!
//! ## Example
//!
//! ```
//! use parada_transit::prelude::*;
//!
//! let stops = vec![
//!     Stop::new("stop9", "Parada Centro - Plaza Constitución", 32.5149, -117.0382),
//!     Stop::new("stop11", "Parada Otay - Terminal Otay", 32.5110, -117.0350),
//! ];
//!
//! let me = Some(Coordinate::new(32.5112, -117.0351));
//! let ranking = rank_stops(me, &stops, DistanceMode::Haversine);
//! let within_1km = filter_by_limit(ranking, Some(1.0));
//! assert_eq!(within_1km.len(), 2);
//!
//! let closest = find_closest_stop(me.unwrap(), &stops, DistanceMode::Planar).unwrap();
//! assert_eq!(closest.id.as_str(), "stop11");
//!
//! // No fix yet: dataset order
//! let sorted = sort_by_distance(None, &stops, DistanceMode::Planar);
//! assert_eq!(sorted[0].id.as_str(), "stop9");
//! ```

pub mod board;
#[cfg(feature = "serde")]
pub mod dataset;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod proximity;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::board::{BoardEntry, BoardView, StopBoard};
    #[cfg(feature = "serde")]
    pub use crate::dataset::Dataset;
    pub use crate::identifiers::*;
    pub use crate::models::{config::*, traits::*, types::*};
    pub use crate::provider::StaticStopProvider;
    pub use crate::proximity::*;
    pub use crate::spatial::{distance, haversine_distance, planar_distance, DistanceMode};
}

pub use prelude::*;

//! Distance strategies, spatial indexing and query utilities.

pub mod index;
pub mod mode;
pub mod queries;

pub use mode::{distance, DistanceMode};
pub use queries::{haversine_distance, planar_distance};

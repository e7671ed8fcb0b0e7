//! Stop data models, configuration, and traits.

pub mod config;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use config::EngineConfig;
pub use traits::{Located, LocationSource, StopProvider};
pub use types::{
    Coordinate, DistanceLimit, ProximityError, Result, Route, Stop, DISTANCE_LIMITS,
    EXTENDED_DISTANCE_LIMITS,
};

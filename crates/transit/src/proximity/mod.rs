//! Ranking, filtering and closest-stop selection.
//!
//! Every function here is pure: the user position is passed in as a
//! snapshot on each call and nothing is cached between calls.

pub mod closest;
pub mod ranking;

pub use closest::{closest_with_distance, find_closest_stop, is_near_stop};
pub use ranking::{filter_by_limit, rank_stops, sort_by_distance, RankedStop, Ranking};

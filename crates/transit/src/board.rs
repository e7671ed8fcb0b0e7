//! Renderer-facing stop board.
//!
//! A [`StopBoard`] holds the configured stop list and turns each new
//! location snapshot into a [`BoardView`]: the ranked and filtered stops
//! with their distances, near flags and the closest stop.

use std::sync::Arc;

use crate::models::{traits::*, types::*, EngineConfig};
use crate::proximity::{closest_with_distance, filter_by_limit, is_near_stop, rank_stops};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardEntry {
    pub stop: Arc<Stop>,
    /// Distance from the fix in kilometers, per the configured mode
    pub distance_km: Option<f64>,
    pub near: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardView {
    pub fix: Option<Coordinate>,
    /// Limit the entries were filtered with
    pub limit_km: Option<f64>,
    pub entries: Vec<BoardEntry>,
    /// Closest of all board stops, ignoring the limit
    pub closest: Option<BoardEntry>,
}

impl BoardView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct StopBoard {
    config: EngineConfig,
    stops: Vec<Arc<Stop>>,
}

impl StopBoard {
    /// Board over the configured route, or every stop when no route is set
    pub fn new(config: EngineConfig, provider: &dyn StopProvider) -> Result<Self> {
        let stops = match &config.route {
            Some(id) => provider
                .route_or_err(id)?
                .stops
                .iter()
                .cloned()
                .map(Arc::new)
                .collect(),
            None => provider.all_stops(),
        };

        Ok(Self::with_stops(config, stops))
    }

    pub fn with_stops(config: EngineConfig, stops: Vec<Arc<Stop>>) -> Self {
        Self { config, stops }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stops(&self) -> &[Arc<Stop>] {
        &self.stops
    }

    pub fn refresh_from(&self, source: &dyn LocationSource) -> BoardView {
        self.refresh(source.last_fix())
    }

    pub fn refresh(&self, fix: Option<Coordinate>) -> BoardView {
        let mode = self.config.mode;
        let ranking = filter_by_limit(rank_stops(fix, &self.stops, mode), self.config.limit_km);

        let entries = ranking
            .entries()
            .iter()
            .map(|e| BoardEntry {
                stop: Arc::clone(e.stop),
                distance_km: ranking.distance_km(e),
                near: is_near_stop(fix, e.stop),
            })
            .collect();

        let closest = fix.and_then(|origin| {
            let (stop, distance) = closest_with_distance(origin, &self.stops, mode).ok()?;
            Some(BoardEntry {
                stop: Arc::clone(stop),
                distance_km: Some(mode.to_km(distance)),
                near: is_near_stop(fix, stop),
            })
        });

        BoardView { fix, limit_km: self.config.limit_km, entries, closest }
    }
}

//! Distance ranking and limit filtering.
//!
//! A [`Ranking`] keeps the distance computed for every stop while sorting,
//! so a later [`filter_by_limit`] compares exactly the values the order was
//! built from.

use crate::models::traits::Located;
use crate::models::types::Coordinate;
use crate::spatial::DistanceMode;

/// A stop together with its distance from the ranking origin.
///
/// `distance` is in the mode's native unit and is `None` when the ranking
/// had no origin.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedStop<S> {
    pub stop: S,
    pub distance: Option<f64>,
}

/// Stops ordered by distance from an optional origin
#[derive(Clone, Debug)]
pub struct Ranking<S> {
    origin: Option<Coordinate>,
    mode: DistanceMode,
    entries: Vec<RankedStop<S>>,
}

impl<S> Ranking<S> {
    pub fn origin(&self) -> Option<Coordinate> {
        self.origin
    }

    pub fn mode(&self) -> DistanceMode {
        self.mode
    }

    pub fn entries(&self) -> &[RankedStop<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|e| &e.stop)
    }

    /// Distance of an entry in kilometers, per the ranking's mode
    pub fn distance_km(&self, entry: &RankedStop<S>) -> Option<f64> {
        entry.distance.map(|d| self.mode.to_km(d))
    }

    pub fn into_stops(self) -> Vec<S> {
        self.entries.into_iter().map(|e| e.stop).collect()
    }
}

impl<S> IntoIterator for Ranking<S> {
    type Item = RankedStop<S>;
    type IntoIter = std::vec::IntoIter<RankedStop<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Rank stops by ascending distance from `origin`.
///
/// The sort is stable: stops at equal distance keep their input order.
/// Without an origin the input order is kept as is.
pub fn rank_stops<I>(origin: Option<Coordinate>, stops: I, mode: DistanceMode) -> Ranking<I::Item>
where
    I: IntoIterator,
    I::Item: Located,
{
    let Some(origin) = origin else {
        let entries = stops
            .into_iter()
            .map(|stop| RankedStop { stop, distance: None })
            .collect();
        return Ranking { origin: None, mode, entries };
    };

    let mut ranked: Vec<(f64, I::Item)> = stops
        .into_iter()
        .map(|stop| (mode.distance(origin, stop.location()), stop))
        .collect();
    // NaN sorts last whatever its sign bit
    ranked.sort_by(|a, b| a.0.is_nan().cmp(&b.0.is_nan()).then(a.0.total_cmp(&b.0)));

    log::trace!("Ranked {} stops from {:?} ({})", ranked.len(), origin, mode);

    let entries = ranked
        .into_iter()
        .map(|(distance, stop)| RankedStop { stop, distance: Some(distance) })
        .collect();

    Ranking { origin: Some(origin), mode, entries }
}

/// Stops sorted by ascending distance from `origin`, or in input order
/// when there is no fix yet
pub fn sort_by_distance<S: Located>(
    origin: Option<Coordinate>,
    stops: &[S],
    mode: DistanceMode,
) -> Vec<&S> {
    rank_stops(origin, stops, mode).into_stops()
}

/// Keep only the stops within `limit_km` kilometers.
///
/// A `None` limit or a ranking without origin is returned unchanged. An
/// empty result is valid.
pub fn filter_by_limit<S>(ranking: Ranking<S>, limit_km: Option<f64>) -> Ranking<S> {
    let Some(limit_km) = limit_km else {
        return ranking;
    };
    if ranking.origin.is_none() {
        return ranking;
    }

    let Ranking { origin, mode, entries } = ranking;
    let before = entries.len();
    let entries: Vec<_> = entries
        .into_iter()
        .filter(|e| e.distance.is_some_and(|d| mode.to_km(d) <= limit_km))
        .collect();

    log::debug!("Limit {} km kept {}/{} stops", limit_km, entries.len(), before);

    Ranking { origin, mode, entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Stop;

    fn florido_stops() -> Vec<Stop> {
        vec![
            Stop::new("stop1", "Parada Florido - Av. Florido", 32.5200, -117.0450),
            Stop::new("stop2", "Parada UTT - Campus UTT", 32.5250, -117.0480),
            Stop::new("stop3", "Parada Florido - Centro de Atención", 32.5210, -117.0440),
            Stop::new("stop4", "Parada Florido - Terminal", 32.5220, -117.0430),
        ]
    }

    fn ids(stops: &[&Stop]) -> Vec<String> {
        stops.iter().map(|s| s.id.to_string()).collect()
    }

    #[test]
    fn test_sort_orders_by_distance() {
        let stops = florido_stops();
        let origin = Some(Coordinate::new(32.5300, -117.0500));

        for mode in [DistanceMode::Haversine, DistanceMode::Planar] {
            let sorted = sort_by_distance(origin, &stops, mode);
            assert_eq!(ids(&sorted), ["stop2", "stop4", "stop3", "stop1"], "mode {mode}");
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let stops = vec![Stop::new("a", "A", 0.0, 0.0), Stop::new("b", "B", 0.0, 0.0)];

        for mode in [DistanceMode::Haversine, DistanceMode::Planar] {
            let sorted = sort_by_distance(Some(Coordinate::new(0.0, 0.0)), &stops, mode);
            assert_eq!(ids(&sorted), ["a", "b"]);
        }
    }

    #[test]
    fn test_sort_puts_unmeasurable_stops_last() {
        let stops = vec![
            Stop::new("broken", "Broken", f64::INFINITY, 0.0),
            Stop::new("good", "Good", 0.001, 0.0),
            Stop::new("far", "Far", 1.0, 0.0),
        ];
        let origin = Coordinate::new(0.0, 0.0);

        for mode in [DistanceMode::Haversine, DistanceMode::Planar] {
            let ranking = rank_stops(Some(origin), &stops, mode);
            assert!(ranking.entries()[2].distance.is_some_and(|d| !d.is_finite()), "mode {mode}");
            assert_eq!(ids(&ranking.into_stops()), ["good", "far", "broken"], "mode {mode}");

            let closest = crate::proximity::find_closest_stop(origin, &stops, mode).unwrap();
            assert_eq!(closest.id.as_str(), "good");
        }
    }

    #[test]
    fn test_sort_without_fix_is_pass_through() {
        let stops = florido_stops();
        let sorted = sort_by_distance(None, &stops, DistanceMode::Planar);

        assert_eq!(ids(&sorted), ["stop1", "stop2", "stop3", "stop4"]);
        assert!(sorted.iter().zip(&stops).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let stops = florido_stops();
        let snapshot = stops.clone();
        let _ = sort_by_distance(Some(Coordinate::new(32.5300, -117.0500)), &stops, DistanceMode::Planar);
        assert_eq!(stops, snapshot);
    }

    #[test]
    fn test_ranking_keeps_distances() {
        let stops = florido_stops();
        let origin = Coordinate::new(32.5200, -117.0450);
        let ranking = rank_stops(Some(origin), &stops, DistanceMode::Haversine);

        assert_eq!(ranking.origin(), Some(origin));
        assert_eq!(ranking.entries()[0].distance, Some(0.0));
        let distances: Vec<f64> = ranking.entries().iter().filter_map(|e| e.distance).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ranking.distance_km(&ranking.entries()[0]), Some(0.0));
    }

    #[test]
    fn test_filter_limit() {
        let stops = vec![
            Stop::new("near", "Near", 0.0, 0.005),
            Stop::new("mid", "Mid", 0.0, 0.02),
            Stop::new("far", "Far", 0.0, 0.1),
        ];
        let origin = Some(Coordinate::new(0.0, 0.0));

        // 0.005 deg ~ 0.56 km, 0.02 deg ~ 2.2 km, 0.1 deg ~ 11 km
        for mode in [DistanceMode::Haversine, DistanceMode::Planar] {
            let within_1 = filter_by_limit(rank_stops(origin, &stops, mode), Some(1.0));
            assert_eq!(ids(&within_1.into_stops()), ["near"]);

            let within_3 = filter_by_limit(rank_stops(origin, &stops, mode), Some(3.0));
            assert_eq!(ids(&within_3.into_stops()), ["near", "mid"]);

            let none = filter_by_limit(rank_stops(origin, &stops, mode), Some(0.1));
            assert!(none.is_empty());
        }
    }

    #[test]
    fn test_filter_is_monotonic() {
        let stops = florido_stops();
        let origin = Some(Coordinate::new(32.5149, -117.0382));
        let limits = [0.1, 0.5, 0.9, 1.0, 1.2, 3.0];

        for mode in [DistanceMode::Haversine, DistanceMode::Planar] {
            for pair in limits.windows(2) {
                let small = filter_by_limit(rank_stops(origin, &stops, mode), Some(pair[0])).into_stops();
                let large = filter_by_limit(rank_stops(origin, &stops, mode), Some(pair[1])).into_stops();
                assert!(small.iter().all(|s| large.iter().any(|l| std::ptr::eq(*s, *l))));
            }
        }
    }

    #[test]
    fn test_filter_without_limit_is_identity() {
        let stops = florido_stops();
        let ranking = rank_stops(Some(Coordinate::new(32.5149, -117.0382)), &stops, DistanceMode::Planar);
        let expected = ranking.entries().to_vec();

        let filtered = filter_by_limit(ranking, None);
        assert_eq!(filtered.entries(), expected.as_slice());
    }

    #[test]
    fn test_filter_without_fix_is_identity() {
        let stops = florido_stops();
        let filtered = filter_by_limit(rank_stops(None, &stops, DistanceMode::Planar), Some(0.001));
        assert_eq!(ids(&filtered.into_stops()), ["stop1", "stop2", "stop3", "stop4"]);
    }

    #[test]
    fn test_filter_uses_ranking_distances() {
        // Boundary stop exactly at the limit under the ranking's own numbers
        let stops = vec![Stop::new("edge", "Edge", 0.0, 0.01)];
        let origin = Some(Coordinate::new(0.0, 0.0));
        let ranking = rank_stops(origin, &stops, DistanceMode::Planar);
        let limit = ranking.distance_km(&ranking.entries()[0]);

        let filtered = filter_by_limit(ranking, limit);
        assert_eq!(filtered.len(), 1);
    }
}

//! Route datasets loaded from JSON.
//!
//! The app ships its stops as a static list of routes. The same shape is
//! accepted from files so other cities can be loaded without a rebuild.

use std::collections::HashSet;

use crate::models::types::*;
use crate::provider::StaticStopProvider;

const BUILTIN_ROUTES: &str = include_str!("../data/routes.json");

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub routes: Vec<Route>,
}

impl Dataset {
    /// Parse and check a dataset.
    ///
    /// Duplicate stop ids inside a route are rejected. Out of range
    /// coordinates are only logged.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).map_err(|e| ProximityError::Serialization(e.to_string()))?;
        dataset.check()?;
        Ok(dataset)
    }

    /// The routes embedded in the app
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_ROUTES)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ProximityError::Serialization(e.to_string()))
    }

    pub fn stop_count(&self) -> usize {
        self.routes.iter().map(|r| r.stops.len()).sum()
    }

    pub fn into_provider(self) -> StaticStopProvider {
        StaticStopProvider::from_routes(self.routes)
    }

    fn check(&self) -> Result<()> {
        for route in &self.routes {
            let mut seen = HashSet::new();
            for stop in &route.stops {
                if !seen.insert(&stop.id) {
                    return Err(ProximityError::InvalidData(format!(
                        "Duplicate stop {} in route {}",
                        stop.id, route.id
                    )));
                }
                if !stop.coordinate().is_valid() {
                    log::warn!(
                        "Stop {} in route {} has out of range coordinates ({}, {})",
                        stop.id,
                        route.id,
                        stop.latitude,
                        stop.longitude
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traits::StopProvider;

    #[test]
    fn test_builtin_dataset() {
        let dataset = Dataset::builtin().unwrap();

        let names: Vec<_> = dataset.routes.iter().map(|r| r.name.to_string()).collect();
        assert_eq!(names, ["Ruta Florido", "Ruta Morita", "Ruta Centro/Otay", "Tracker de Ubicación"]);
        assert_eq!(dataset.stop_count(), 15);

        let tracker = &dataset.routes[3];
        assert!(tracker.stops.iter().all(|s| s.radius == Some(100.0)));
        assert!(dataset.routes[0].stops.iter().all(|s| s.radius.is_none()));
    }

    #[test]
    fn test_builtin_into_provider() {
        let provider = Dataset::builtin().unwrap().into_provider();
        let stop = provider.get_stop(&"stop6".into()).unwrap();
        assert_eq!(&*stop.name, "Parada Morita - Calimax Las Abejas");
    }

    #[test]
    fn test_duplicate_stop_rejected() {
        let json = r#"{ "routes": [ { "id": "r", "name": "R", "stops": [
            { "id": "a", "name": "A", "latitude": 0.0, "longitude": 0.0 },
            { "id": "a", "name": "A again", "latitude": 1.0, "longitude": 1.0 }
        ] } ] }"#;

        assert!(matches!(Dataset::from_json(json), Err(ProximityError::InvalidData(_))));
    }

    #[test]
    fn test_out_of_range_is_accepted() {
        let json = r#"{ "routes": [ { "id": "r", "name": "R", "stops": [
            { "id": "a", "name": "A", "latitude": 123.0, "longitude": 0.0 }
        ] } ] }"#;

        assert_eq!(Dataset::from_json(json).unwrap().stop_count(), 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Dataset::from_json("{ \"routes\": 3 }"), Err(ProximityError::Serialization(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_radius_optional() {
        let dataset = Dataset {
            routes: vec![Route::new("r", "R", vec![Stop::new("a", "A", 1.0, 2.0)])],
        };
        let json = dataset.to_json().unwrap();

        assert!(!json.contains("radius"));
        assert_eq!(Dataset::from_json(&json).unwrap(), dataset);
    }
}

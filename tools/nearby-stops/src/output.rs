use std::fmt::Write;

use parada_transit::prelude::*;

/// Human readable distance
fn format_km(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.2} km", km)
    }
}

fn format_entry(out: &mut String, entry: &BoardEntry) {
    let distance = entry.distance_km.map(format_km).unwrap_or_else(|| "-".into());
    let near = if entry.near { "  (near)" } else { "" };
    let _ = writeln!(out, "{:>10}  {:<8} {}{}", distance, entry.stop.id.as_str(), entry.stop.name, near);
}

pub fn render_view(view: &BoardView, mode: DistanceMode) -> String {
    let mut out = String::new();

    if view.is_empty() {
        let _ = match view.limit_km {
            Some(limit) => writeln!(out, "No stops within {}", format_km(limit)),
            None => writeln!(out, "No stops"),
        };
    }
    for entry in &view.entries {
        format_entry(&mut out, entry);
    }

    if let Some(closest) = &view.closest {
        let _ = writeln!(out);
        let _ = write!(out, "Closest ({mode}):");
        format_entry(&mut out, closest);
    }

    out
}

pub fn render_routes(dataset: &Dataset) -> String {
    let mut out = String::new();
    for route in &dataset.routes {
        let _ = writeln!(out, "{:<10} {} ({} stops)", route.id.as_str(), route.name, route.stops.len());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn entry(id: &str, distance_km: Option<f64>, near: bool) -> BoardEntry {
        BoardEntry {
            stop: Arc::new(Stop::new(id, format!("Parada {id}"), 0.0, 0.0)),
            distance_km,
            near,
        }
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(0.3532), "353 m");
        assert_eq!(format_km(2.5), "2.50 km");
    }

    #[test]
    fn test_render_view() {
        let view = BoardView {
            fix: Some(Coordinate::new(0.0, 0.0)),
            limit_km: Some(5.0),
            entries: vec![entry("a", Some(0.05), true), entry("b", Some(1.5), false)],
            closest: Some(entry("a", Some(0.05), true)),
        };

        let text = render_view(&view, DistanceMode::Haversine);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "      50 m  a        Parada a  (near)");
        assert_eq!(lines[1], "   1.50 km  b        Parada b");
        assert!(lines[3].starts_with("Closest (haversine):"));
    }

    #[test]
    fn test_render_without_fix() {
        let view = BoardView { fix: None, limit_km: None, entries: vec![entry("a", None, false)], closest: None };
        assert_eq!(render_view(&view, DistanceMode::Planar), "         -  a        Parada a\n");
    }

    #[test]
    fn test_render_empty_with_limit() {
        let view = BoardView {
            fix: Some(Coordinate::new(0.0, 0.0)),
            limit_km: Some(3.0),
            entries: vec![],
            closest: None,
        };
        assert_eq!(render_view(&view, DistanceMode::Planar), "No stops within 3.00 km\n");
    }

    #[test]
    fn test_render_empty_without_limit() {
        let view = BoardView { fix: None, limit_km: None, entries: vec![], closest: None };
        assert_eq!(render_view(&view, DistanceMode::Planar), "No stops\n");
    }
}

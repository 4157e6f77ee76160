//! Fixed sample dataset of central-Mexico cities
//!
//! Road distances in kilometers, used by the trips endpoint when no other
//! dataset is supplied. The dataset is small on purpose; the graph built
//! from it is rebuilt per request.

use super::service::{GraphData, GraphEdge};

/// Cities around Mexico City with approximate road distances.
pub fn sample() -> GraphData {
    let cities = [
        "Mexico City",
        "Toluca",
        "Cuernavaca",
        "Pachuca",
        "Puebla",
        "Queretaro",
        "Taxco",
    ];
    let edges = [
        ("Mexico City", "Toluca", 65.0),
        ("Mexico City", "Cuernavaca", 85.0),
        ("Mexico City", "Pachuca", 95.0),
        ("Mexico City", "Puebla", 130.0),
        ("Mexico City", "Queretaro", 215.0),
        ("Cuernavaca", "Taxco", 100.0),
        ("Puebla", "Pachuca", 170.0),
    ];

    GraphData {
        cities: cities.iter().map(|c| c.to_string()).collect(),
        edges: edges
            .iter()
            .map(|(from, to, distance)| GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
                distance: *distance,
            })
            .collect(),
    }
}

// ── Tests ──────────────────────────────────────────────────────

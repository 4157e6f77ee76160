//! Nearby-city queries over a validated city dataset

use crate::domain::{CityGraph, DomainResult, Neighbor};

/// Threshold applied when a query does not name one
pub const DEFAULT_MAX_DISTANCE: f64 = 250.0;

/// A weighted connection between two named cities
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Batch dataset of cities and the edges between them
#[derive(Debug, Clone)]
pub struct GraphData {
    pub cities: Vec<String>,
    pub edges: Vec<GraphEdge>,
}

/// Outcome of a speculative dataset check.
///
/// Returned as a value rather than an error: callers probe a dataset before
/// committing to build a graph from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDataCheck {
    pub ok: bool,
    pub reason: Option<String>,
}

impl GraphDataCheck {
    fn passed() -> Self {
        Self { ok: true, reason: None }
    }

    fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

/// Checks a dataset without building anything, stopping at the first
/// violation: duplicate city names, blank city names, edge endpoints missing
/// from the city list, non-finite or negative distances.
pub fn validate_graph_data(data: &GraphData) -> GraphDataCheck {
    let mut seen = std::collections::HashSet::new();
    for city in &data.cities {
        if !seen.insert(city.as_str()) {
            return GraphDataCheck::failed(format!("duplicate city: {city}"));
        }
    }

    for city in &data.cities {
        if city.trim().is_empty() {
            return GraphDataCheck::failed("city name cannot be empty");
        }
    }

    for edge in &data.edges {
        for endpoint in [&edge.from, &edge.to] {
            if !seen.contains(endpoint.as_str()) {
                return GraphDataCheck::failed(format!("unknown city: {endpoint}"));
            }
        }
    }

    for edge in &data.edges {
        if !edge.distance.is_finite() || edge.distance < 0.0 {
            return GraphDataCheck::failed(format!("invalid distance: {}", edge.distance));
        }
    }

    GraphDataCheck::passed()
}

/// Builds a graph from a dataset, cities first, then edges, in input order.
///
/// Assumes the caller already ran [`validate_graph_data`]; any failure from
/// the graph itself propagates unchanged.
pub fn build_graph(data: &GraphData) -> DomainResult<CityGraph> {
    let mut graph = CityGraph::new();
    for city in &data.cities {
        graph.add_city(city)?;
    }
    for edge in &data.edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance)?;
    }
    Ok(graph)
}

/// Direct neighbors of `destination` within `max_distance`, closest first.
///
/// An unknown destination yields an empty list, not a failure. Only one-hop
/// neighbors are considered; distances are never summed across intermediate
/// cities. Ties keep their insertion order.
pub fn nearby_cities(graph: &CityGraph, destination: &str, max_distance: f64) -> Vec<Neighbor> {
    let Ok(neighbors) = graph.neighbors(destination) else {
        return Vec::new();
    };

    let mut nearby: Vec<Neighbor> = neighbors
        .into_iter()
        .filter(|n| n.distance <= max_distance)
        .collect();
    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    nearby
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn data(cities: &[&str], edges: &[(&str, &str, f64)]) -> GraphData {
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

    #[test]
    fn validate_accepts_well_formed_dataset() {
        let check = validate_graph_data(&data(
            &["A", "B", "C"],
            &[("A", "B", 50.0), ("A", "C", 10.0)],
        ));
        assert_eq!(check, GraphDataCheck { ok: true, reason: None });
    }

    #[test]
    fn validate_rejects_duplicate_cities() {
        let check = validate_graph_data(&data(&["A", "A"], &[]));
        assert!(!check.ok);
        assert_eq!(check.reason.as_deref(), Some("duplicate city: A"));
    }

    #[test]
    fn validate_rejects_blank_city_name() {
        let check = validate_graph_data(&data(&["A", " "], &[]));
        assert!(!check.ok);
        assert_eq!(check.reason.as_deref(), Some("city name cannot be empty"));
    }

    #[test]
    fn validate_rejects_edge_with_unknown_endpoint() {
        let check = validate_graph_data(&data(&["A", "B"], &[("A", "Z", 10.0)]));
        assert!(!check.ok);
        assert_eq!(check.reason.as_deref(), Some("unknown city: Z"));
    }

    #[test]
    fn validate_rejects_bad_distances() {
        for bad in [-5.0, f64::NAN, f64::INFINITY] {
            let check = validate_graph_data(&data(&["A", "B"], &[("A", "B", bad)]));
            assert!(!check.ok, "distance {bad} should be rejected");
        }
    }

    #[test]
    fn validate_reports_first_violation_only() {
        // duplicates are checked before blank names
        let check = validate_graph_data(&data(&["A", "A", " "], &[]));
        assert_eq!(check.reason.as_deref(), Some("duplicate city: A"));
    }

    #[test]
    fn build_graph_adds_cities_and_edges_in_order() {
        let graph = build_graph(&data(
            &["A", "B", "C"],
            &[("A", "B", 50.0), ("A", "C", 10.0)],
        ))
        .unwrap();
        assert_eq!(graph.city_count(), 3);
        assert_eq!(graph.neighbors("A").unwrap().len(), 2);
    }

    #[test]
    fn build_graph_propagates_graph_failures() {
        assert!(build_graph(&data(&["A"], &[("A", "Z", 1.0)])).is_err());
    }

    #[test]
    fn nearby_cities_sorts_ascending_by_distance() {
        let graph = build_graph(&data(
            &["A", "B", "C"],
            &[("A", "B", 50.0), ("A", "C", 10.0)],
        ))
        .unwrap();

        let result = nearby_cities(&graph, "A", 100.0);
        assert_eq!(
            result,
            vec![
                Neighbor { city: "C".into(), distance: 10.0 },
                Neighbor { city: "B".into(), distance: 50.0 },
            ]
        );
    }

    #[test]
    fn nearby_cities_applies_threshold_inclusively() {
        let graph = build_graph(&data(
            &["A", "B", "C"],
            &[("A", "B", 50.0), ("A", "C", 10.0)],
        ))
        .unwrap();

        assert_eq!(
            nearby_cities(&graph, "A", 20.0),
            vec![Neighbor { city: "C".into(), distance: 10.0 }]
        );
        // threshold is inclusive
        assert_eq!(nearby_cities(&graph, "A", 10.0).len(), 1);
        assert!(nearby_cities(&graph, "A", 9.9).is_empty());
    }

    #[test]
    fn nearby_cities_unknown_destination_is_empty() {
        let graph = build_graph(&data(&["A"], &[])).unwrap();
        assert!(nearby_cities(&graph, "Nowhere", 100.0).is_empty());
    }

    #[test]
    fn nearby_cities_preserves_insertion_order_on_ties() {
        let graph = build_graph(&data(
            &["A", "B", "C", "D"],
            &[("A", "B", 30.0), ("A", "C", 30.0), ("A", "D", 30.0)],
        ))
        .unwrap();

        let neighbors = nearby_cities(&graph, "A", 100.0);
        let cities: Vec<&str> = neighbors
            .iter()
            .map(|n| n.city.as_str())
            .collect();
        assert_eq!(cities, vec!["B", "C", "D"]);
    }

    #[test]
    fn default_threshold_is_250() {
        assert_eq!(DEFAULT_MAX_DISTANCE, 250.0);
    }
}

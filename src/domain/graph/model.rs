//! City graph value type
//!
//! Adjacency-list graph of cities connected by symmetric, weighted edges.
//! Graphs are request-local: built from a validated dataset, queried, then
//! dropped. Nothing here needs synchronization.

use std::collections::HashMap;

use crate::domain::{DomainError, DomainResult};

/// A directly connected city and its distance
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub city: String,
    pub distance: f64,
}

/// Undirected weighted graph keyed by city name
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    adjacency: HashMap<String, Vec<Neighbor>>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cities in the graph
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds a city. Re-adding an existing city is a silent no-op.
    pub fn add_city(&mut self, name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "city name cannot be empty".to_string(),
            ));
        }
        self.adjacency.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Adds a symmetric edge between two existing cities.
    ///
    /// Duplicate edges are allowed and simply accumulate in both adjacency
    /// lists.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> DomainResult<()> {
        for endpoint in [from, to] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(DomainError::Validation(format!(
                    "unknown city: {endpoint}"
                )));
            }
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(DomainError::Validation(format!(
                "invalid distance: {distance}"
            )));
        }

        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                city: to.to_string(),
                distance,
            });
        }
        if let Some(list) = self.adjacency.get_mut(to) {
            list.push(Neighbor {
                city: from.to_string(),
                distance,
            });
        }
        Ok(())
    }

    /// Adjacency list of a city, as a defensive copy.
    pub fn neighbors(&self, city: &str) -> DomainResult<Vec<Neighbor>> {
        self.adjacency
            .get(city)
            .cloned()
            .ok_or_else(|| DomainError::Validation(format!("unknown city: {city}")))
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Trip planning queries

pub mod dataset;
pub mod service;

pub use service::{
    build_graph, nearby_cities, validate_graph_data, GraphData, GraphDataCheck, GraphEdge,
    DEFAULT_MAX_DISTANCE,
};

//! City graph value types

pub mod model;

pub use model::{CityGraph, Neighbor};

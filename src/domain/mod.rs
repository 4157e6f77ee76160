//! Core business entities, repository traits and errors

pub mod error;
pub mod graph;
pub mod reservation;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use graph::{CityGraph, Neighbor};
pub use reservation::{Reservation, ReservationRepository, ReservationStatus};

//! Reservation entity and storage contract

pub mod model;
pub mod repository;

pub use model::{Reservation, ReservationStatus};
pub use repository::ReservationRepository;

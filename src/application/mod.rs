//! Business logic services

pub mod reservations;
pub mod trips;

pub use reservations::{ReservationDraft, ReservationService};

//! Reservation lifecycle

pub mod service;

pub use service::{ReservationDraft, ReservationService};

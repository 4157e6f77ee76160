//! Reservation domain entity

use chrono::NaiveDate;

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Reservation is current and may be edited
    Active,
    /// Reservation was canceled; terminal, no further edits
    Canceled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hotel reservation
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique identifier, assigned by the store on first save
    pub id: Option<i64>,
    /// Name of the guest
    pub guest_name: String,
    /// Name of the hotel
    pub hotel_name: String,
    /// Check-in date
    pub check_in: NaiveDate,
    /// Check-out date, strictly after check-in
    pub check_out: NaiveDate,
    /// Current status
    pub status: ReservationStatus,
}

impl Reservation {
    /// Builds a new Active reservation with no identifier yet.
    pub fn new(
        guest_name: impl Into<String>,
        hotel_name: impl Into<String>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            guest_name: guest_name.into(),
            hotel_name: hotel_name.into(),
            check_in,
            check_out,
            status: ReservationStatus::Active,
        }
    }

    /// Cancel this reservation
    pub fn cancel(&mut self) {
        self.status = ReservationStatus::Canceled;
    }

    /// Whether the reservation may still be edited
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Reservation DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ReservationDraft;
use crate::domain::Reservation;

/// Request body for creating or updating a reservation.
///
/// Names are validated at the extractor; dates stay optional so an absent
/// date reaches the service layer and is reported with the same reason on
/// every path.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "guest_name": "Ana Torres",
    "hotel_name": "Hotel Azul",
    "check_in": "2026-09-01",
    "check_out": "2026-09-04"
}))]
pub struct ReservationPayload {
    /// Guest name, must not be blank
    #[validate(length(min = 1, message = "must not be blank"))]
    pub guest_name: String,
    /// Hotel name, must not be blank
    #[validate(length(min = 1, message = "must not be blank"))]
    pub hotel_name: String,
    /// Check-in date (ISO 8601, `YYYY-MM-DD`)
    pub check_in: Option<NaiveDate>,
    /// Check-out date (ISO 8601, `YYYY-MM-DD`)
    pub check_out: Option<NaiveDate>,
}

impl From<ReservationPayload> for ReservationDraft {
    fn from(payload: ReservationPayload) -> Self {
        Self {
            guest_name: payload.guest_name,
            hotel_name: payload.hotel_name,
            check_in: payload.check_in,
            check_out: payload.check_out,
        }
    }
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: i64,
    pub guest_name: String,
    pub hotel_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// `Active` or `Canceled`
    pub status: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            // stored reservations always carry an id
            id: r.id.unwrap_or_default(),
            guest_name: r.guest_name,
            hotel_name: r.hotel_name,
            check_in: r.check_in,
            check_out: r.check_out,
            status: r.status.as_str().to_string(),
        }
    }
}

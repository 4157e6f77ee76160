//! Reservation business logic service

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::domain::{
    DomainError, DomainResult, Reservation, ReservationRepository,
};

/// Incoming reservation data, as received from the API layer.
///
/// Dates stay optional here so an absent date surfaces as a business
/// validation failure with a deterministic reason, not a deserialization
/// error.
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub guest_name: String,
    pub hotel_name: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// Service enforcing the reservation lifecycle: validation on create and
/// update, and the Active → Canceled transition.
///
/// The storage collaborator is constructor-injected; the service never
/// touches the map directly.
pub struct ReservationService {
    store: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(store: Arc<dyn ReservationRepository>) -> Self {
        Self { store }
    }

    /// All reservations, order not significant
    pub async fn list(&self) -> DomainResult<Vec<Reservation>> {
        self.store.find_all().await
    }

    /// Single reservation by id
    pub async fn get(&self, id: i64) -> DomainResult<Reservation> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "reservation",
                id,
            })
    }

    /// Validates the draft and stores a new Active reservation.
    pub async fn create(&self, draft: ReservationDraft) -> DomainResult<Reservation> {
        let (check_in, check_out) = validate_dates(draft.check_in, draft.check_out)?;

        let reservation =
            Reservation::new(draft.guest_name, draft.hotel_name, check_in, check_out);
        let saved = self.store.save(reservation).await?;

        info!(id = saved.id, guest = %saved.guest_name, "Reservation created");
        Ok(saved)
    }

    /// Overwrites an existing Active reservation with the draft's fields.
    pub async fn update(&self, id: i64, draft: ReservationDraft) -> DomainResult<Reservation> {
        let mut existing = self.get(id).await?;

        if !existing.is_active() {
            return Err(DomainError::InvalidState(
                "cannot update a canceled reservation".to_string(),
            ));
        }

        let (check_in, check_out) = validate_dates(draft.check_in, draft.check_out)?;

        existing.guest_name = draft.guest_name;
        existing.hotel_name = draft.hotel_name;
        existing.check_in = check_in;
        existing.check_out = check_out;

        let saved = self.store.save(existing).await?;
        info!(id, "Reservation updated");
        Ok(saved)
    }

    /// Marks a reservation as Canceled.
    ///
    /// Canceling an already-Canceled reservation succeeds and leaves the
    /// state unchanged.
    pub async fn cancel(&self, id: i64) -> DomainResult<Reservation> {
        let mut existing = self.get(id).await?;

        existing.cancel();
        let saved = self.store.save(existing).await?;

        info!(id, "Reservation canceled");
        Ok(saved)
    }
}

/// Date rules, applied identically on create and update.
///
/// Checks run in a fixed order and the first violation wins:
/// presence, range, check-in not past, check-out not past. A date equal to
/// today is accepted.
fn validate_dates(
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> DomainResult<(NaiveDate, NaiveDate)> {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return Err(DomainError::Validation(
            "check-in and check-out dates are required".to_string(),
        ));
    };

    if check_out <= check_in {
        return Err(DomainError::Validation(
            "check-out must be after check-in".to_string(),
        ));
    }

    let today = Utc::now().date_naive();
    if check_in < today {
        return Err(DomainError::Validation(
            "check-in must be in the future".to_string(),
        ));
    }
    if check_out < today {
        return Err(DomainError::Validation(
            "check-out must be in the future".to_string(),
        ));
    }

    Ok((check_in, check_out))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReservationStatus;
    use crate::infrastructure::InMemoryReservationStore;
    use chrono::Duration;

    fn service() -> ReservationService {
        ReservationService::new(Arc::new(InMemoryReservationStore::new()))
    }

    fn draft(days_in: i64, days_out: i64) -> ReservationDraft {
        let today = Utc::now().date_naive();
        ReservationDraft {
            guest_name: "Ana".to_string(),
            hotel_name: "Hotel Azul".to_string(),
            check_in: Some(today + Duration::days(days_in)),
            check_out: Some(today + Duration::days(days_out)),
        }
    }

    #[tokio::test]
    async fn create_valid_draft_returns_saved_reservation() {
        let service = service();
        let saved = service.create(draft(1, 3)).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.status, ReservationStatus::Active);
        assert_eq!(saved.guest_name, "Ana");
        assert_eq!(saved.hotel_name, "Hotel Azul");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_assigns_strictly_increasing_ids() {
        let service = service();
        for expected in 1..=3 {
            let saved = service.create(draft(1, 3)).await.unwrap();
            assert_eq!(saved.id, Some(expected));
        }
    }

    #[tokio::test]
    async fn create_checkout_before_checkin_fails() {
        let service = service();
        let err = service.create(draft(5, 1)).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("check-out must be after check-in".into())
        );
    }

    #[tokio::test]
    async fn create_equal_dates_fail() {
        let service = service();
        assert!(service.create(draft(2, 2)).await.is_err());
    }

    #[tokio::test]
    async fn create_missing_date_reports_presence_first() {
        let service = service();
        let mut d = draft(1, 3);
        d.check_in = None;

        // presence is checked before any range or past-date rule
        let err = service.create(d).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("check-in and check-out dates are required".into())
        );
    }

    #[tokio::test]
    async fn create_past_checkin_fails() {
        let service = service();
        let err = service.create(draft(-1, 5)).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("check-in must be in the future".into())
        );
    }

    #[tokio::test]
    async fn create_today_checkin_is_allowed() {
        let service = service();
        assert!(service.create(draft(0, 2)).await.is_ok());
    }

    #[tokio::test]
    async fn update_active_reservation_overwrites_fields() {
        let service = service();
        let saved = service.create(draft(2, 4)).await.unwrap();

        let mut d = draft(3, 6);
        d.guest_name = "Scarlett".to_string();
        d.hotel_name = "Hotel Rojo".to_string();

        let updated = service.update(saved.id.unwrap(), d.clone()).await.unwrap();
        assert_eq!(updated.guest_name, "Scarlett");
        assert_eq!(updated.hotel_name, "Hotel Rojo");
        assert_eq!(Some(updated.check_in), d.check_in);
        assert_eq!(updated.id, saved.id);
    }

    #[tokio::test]
    async fn update_unknown_id_fails_not_found() {
        let service = service();
        let err = service.update(999, draft(1, 2)).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound { entity: "reservation", id: 999 }
        );
    }

    #[tokio::test]
    async fn update_canceled_reservation_fails_invalid_state() {
        let service = service();
        let saved = service.create(draft(2, 4)).await.unwrap();
        service.cancel(saved.id.unwrap()).await.unwrap();

        // valid dates must not rescue an update to a canceled reservation
        let err = service.update(saved.id.unwrap(), draft(3, 5)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[tokio::test]
    async fn cancel_sets_status_and_is_idempotent() {
        let service = service();
        let saved = service.create(draft(1, 3)).await.unwrap();
        let id = saved.id.unwrap();

        let canceled = service.cancel(id).await.unwrap();
        assert_eq!(canceled.status, ReservationStatus::Canceled);
        assert_eq!(service.get(id).await.unwrap().status, ReservationStatus::Canceled);

        // a second cancel succeeds without changing anything
        let again = service.cancel(id).await.unwrap();
        assert_eq!(again.status, ReservationStatus::Canceled);
    }

    #[tokio::test]
    async fn cancel_unknown_id_fails_not_found() {
        let service = service();
        let err = service.cancel(555).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn lifecycle_scenario_create_cancel_update() {
        let service = service();

        let saved = service.create(draft(1, 3)).await.unwrap();
        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.status, ReservationStatus::Active);

        let canceled = service.cancel(1).await.unwrap();
        assert_eq!(canceled.status, ReservationStatus::Canceled);

        let err = service.update(1, draft(10, 12)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }
}

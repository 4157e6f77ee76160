//! Reservation repository interface

use async_trait::async_trait;

use super::model::Reservation;
use crate::domain::DomainResult;

/// Storage contract for reservations.
///
/// Implementations only persist; business rules live in the service layer.
/// Injected into services by constructor so a persistent backend can replace
/// the in-memory one without touching lifecycle logic.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All stored reservations, order not significant
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Lookup by identifier; `None` on miss, never an error
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>>;

    /// Save a reservation, assigning the next sequence id when it has none.
    /// Returns the stored instance with its id populated.
    async fn save(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Remove the entry if present; no-op when absent
    async fn delete(&self, id: i64) -> DomainResult<()>;
}

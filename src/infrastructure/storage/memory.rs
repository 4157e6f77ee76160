//! In-memory reservation storage

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{DomainResult, Reservation, ReservationRepository};

/// Map-backed store, safe for concurrent request handling.
///
/// Identifiers come from an owned atomic sequence starting at 1; there is no
/// process-wide counter. Each operation touches a single map slot.
pub struct InMemoryReservationStore {
    reservations: DashMap<i64, Reservation>,
    sequence: AtomicI64,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationStore {
    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.reservations.iter().map(|r| r.value().clone()).collect())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn save(&self, mut reservation: Reservation) -> DomainResult<Reservation> {
        let id = match reservation.id {
            Some(id) => id,
            None => {
                let id = self.sequence.fetch_add(1, Ordering::SeqCst);
                reservation.id = Some(id);
                id
            }
        };
        self.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.reservations.remove(&id);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn draft(guest: &str) -> Reservation {
        let today = Utc::now().date_naive();
        Reservation::new(
            guest,
            "Hotel Azul",
            today + Duration::days(1),
            today + Duration::days(3),
        )
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids_from_one() {
        let store = InMemoryReservationStore::new();
        let first = store.save(draft("Ana")).await.unwrap();
        let second = store.save(draft("Luis")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let store = InMemoryReservationStore::new();
        let mut saved = store.save(draft("Ana")).await.unwrap();
        saved.guest_name = "Ana Maria".to_string();

        let resaved = store.save(saved.clone()).await.unwrap();
        assert_eq!(resaved.id, Some(1));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
        assert_eq!(
            store.find_by_id(1).await.unwrap().unwrap().guest_name,
            "Ana Maria"
        );
    }

    #[tokio::test]
    async fn find_by_id_miss_is_none() {
        let store = InMemoryReservationStore::new();
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_and_ignores_absent() {
        let store = InMemoryReservationStore::new();
        let saved = store.save(draft("Ana")).await.unwrap();
        let id = saved.id.unwrap();

        store.delete(id).await.unwrap();
        assert_eq!(store.find_by_id(id).await.unwrap(), None);

        // absent id is a no-op, not an error
        store.delete(999).await.unwrap();
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryReservationStore::new();
        let first = store.save(draft("Ana")).await.unwrap();
        store.delete(first.id.unwrap()).await.unwrap();

        let second = store.save(draft("Luis")).await.unwrap();
        assert_eq!(second.id, Some(2));
    }
}

//! Reservation store interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation};
use super::window::TimeWindow;
use crate::domain::DomainResult;

/// Transactional reservation store.
///
/// The store, not the engine, is the last line of defense against the
/// check-then-act race: `insert_if_free` must re-check the overlap
/// invariant and insert in one atomic unit. A SQL implementation would
/// run both inside a serializable transaction (or lean on an exclusion
/// constraint over `(court_id, window)`), mapping a constraint rejection
/// to `DomainError::SlotConflict`.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// A confirmed reservation on `court_id` overlapping `window`, if
    /// any. Pending, canceled and completed rows never count.
    async fn find_conflicting(
        &self,
        court_id: i32,
        window: &TimeWindow,
    ) -> DomainResult<Option<Reservation>>;

    /// Atomically verify the slot is still free and persist the
    /// reservation together with its equipment lines. Fails with
    /// `SlotConflict` when a confirmed overlap exists or commits
    /// concurrently; no partial write is observable either way.
    async fn insert_if_free(&self, new: NewReservation) -> DomainResult<Reservation>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// Confirmed reservations whose window starts inside `range`,
    /// ordered by start time. Backs calendar-day listings.
    async fn list_confirmed_starting_in(
        &self,
        range: &TimeWindow,
    ) -> DomainResult<Vec<Reservation>>;
}

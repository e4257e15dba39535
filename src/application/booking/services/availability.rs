//! Slot availability checks

use std::sync::Arc;

use crate::domain::{DomainResult, RepositoryProvider, TimeWindow};

/// Tests a candidate window against existing confirmed reservations.
///
/// This answer is advisory by nature: it can go stale the moment a
/// concurrent booking commits. The reservation store repeats the check
/// atomically inside `insert_if_free`, so availability here is a fast
/// path for UIs and an early reject for bookings, never the guarantee.
#[derive(Clone)]
pub struct AvailabilityChecker {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityChecker {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// True iff no confirmed reservation on `court_id` overlaps
    /// `window`. Pending, canceled and completed reservations never
    /// block a new booking.
    pub async fn is_available(&self, court_id: i32, window: &TimeWindow) -> DomainResult<bool> {
        let conflict = self
            .repos
            .reservations()
            .find_conflicting(court_id, window)
            .await?;
        Ok(conflict.is_none())
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! Booking orchestration service
//!
//! The single write path of the engine. `confirm_booking` validates the
//! request, resolves the court, prices the slot and hands the result to
//! the reservation store's atomic check-and-insert. Everything before
//! that final insert is read-only, so a failure at any earlier step
//! leaves no persisted state behind.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};
use validator::Validate;

use crate::application::booking::request::{BookingRequest, EquipmentLine};
use crate::application::booking::services::availability::AvailabilityChecker;
use crate::application::booking::services::pricing::PriceCalculator;
use crate::config::Config;
use crate::domain::{
    Court, DomainError, DomainResult, NewReservation, PriceBreakdown, RepositoryProvider,
    Reservation, TimeWindow,
};
use crate::shared::retry::{retry_transient, RetryPolicy};

#[derive(Clone)]
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    config: Config,
    retry: RetryPolicy,
    calculator: PriceCalculator,
    availability: AvailabilityChecker,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, config: Config) -> Self {
        Self {
            calculator: PriceCalculator::new(repos.clone(), config.clone()),
            availability: AvailabilityChecker::new(repos.clone()),
            repos,
            config,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the backoff applied to transient store failures on the
    /// confirm path.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `window` on `court_id` is currently free of confirmed
    /// reservations.
    pub async fn check_availability(
        &self,
        court_id: i32,
        window: &TimeWindow,
    ) -> DomainResult<bool> {
        self.availability.is_available(court_id, window).await
    }

    /// Price a prospective reservation without persisting anything.
    /// Safe to call repeatedly from a live preview UI.
    pub async fn preview_price(
        &self,
        court_id: i32,
        window: &TimeWindow,
        coach_id: Option<i32>,
        equipment: &[EquipmentLine],
    ) -> DomainResult<PriceBreakdown> {
        let court = self.resolve_court(court_id).await?;
        self.calculator
            .compute_total(&court, window, coach_id, equipment)
            .await
    }

    /// Confirm a booking, or reject it without side effects.
    pub async fn confirm_booking(&self, request: BookingRequest) -> DomainResult<Reservation> {
        request
            .validate()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let window = self
            .config
            .resolve_window(&request.start_time, &request.end_time)?;
        let court = self.resolve_court(request.court_id).await?;

        // Early reject on an occupied slot. The store repeats this
        // check under the same lock that performs the insert, which is
        // what actually closes the check-then-act race.
        if !self.availability.is_available(court.id, &window).await? {
            debug!(court_id = court.id, %window, "Slot already taken");
            return Err(DomainError::SlotConflict { court_id: court.id });
        }

        let breakdown = self
            .calculator
            .compute_total(&court, &window, request.coach_id, &request.equipment)
            .await?;

        let new = NewReservation {
            user_id: request.user_id,
            court_id: court.id,
            coach_id: request.coach_id,
            window,
            total_price: breakdown.total,
            equipment: breakdown.equipment.clone(),
            breakdown,
        };

        // Nothing is persisted before this insert, so a transient store
        // failure (lock contention, timeout) re-runs it as a whole.
        let reservation = retry_transient(&self.retry, "insert_reservation", || {
            self.repos.reservations().insert_if_free(new.clone())
        })
        .await?;

        info!(
            reservation_id = reservation.id,
            court_id = reservation.court_id,
            user_id = reservation.user_id,
            total = %reservation.total_price,
            "Booking confirmed"
        );

        Ok(reservation)
    }

    /// Confirmed reservations starting within the business-local day,
    /// for calendar-grid rendering.
    pub async fn reservations_for_day(&self, date: NaiveDate) -> DomainResult<Vec<Reservation>> {
        let range = self.config.day_window(date)?;
        self.repos
            .reservations()
            .list_confirmed_starting_in(&range)
            .await
    }

    async fn resolve_court(&self, id: i32) -> DomainResult<Court> {
        self.repos
            .courts()
            .find_by_id(id)
            .await?
            .filter(|c| c.is_bookable())
            .ok_or(DomainError::CourtNotFound(id))
    }
}

// ── Tests ──────────────────────────────────────────────────────

//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;

use crate::domain::coach::{Coach, CoachRepository};
use crate::domain::court::{Court, CourtRepository};
use crate::domain::equipment::{Equipment, EquipmentRepository};
use crate::domain::pricing::{PricingRule, PricingRuleRepository};
use crate::domain::reservation::{
    NewReservation, Reservation, ReservationRepository, TimeWindow,
};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// In-memory store for tests and embedders running without a database.
///
/// Reservations are bucketed per court. `insert_if_free` performs its
/// overlap re-check and the insert while holding that court's map
/// entry, so two overlapping bookings racing on the same court can
/// never both commit. A bucket already held by a concurrent writer is
/// reported as `DomainError::Transient` instead of blocking, and the
/// confirm path retries. A SQL-backed implementation gets the same
/// guarantees from a serializable transaction (or an exclusion
/// constraint) and its lock timeout.
pub struct InMemoryStore {
    courts: DashMap<i32, Court>,
    coaches: DashMap<i32, Coach>,
    equipment: DashMap<i32, Equipment>,
    pricing_rules: DashMap<i32, PricingRule>,
    /// Confirmed and historical reservations, keyed by court id.
    reservations: DashMap<i32, Vec<Reservation>>,
    reservation_counter: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            courts: DashMap::new(),
            coaches: DashMap::new(),
            equipment: DashMap::new(),
            pricing_rules: DashMap::new(),
            reservations: DashMap::new(),
            reservation_counter: AtomicI32::new(1),
        }
    }

    // Catalog seeding. The repository traits stay read-only; these
    // methods stand in for the external admin CRUD that manages the
    // catalogs in production.

    pub fn insert_court(&self, court: Court) {
        self.courts.insert(court.id, court);
    }

    pub fn insert_coach(&self, coach: Coach) {
        self.coaches.insert(coach.id, coach);
    }

    pub fn insert_equipment(&self, item: Equipment) {
        self.equipment.insert(item.id, item);
    }

    pub fn insert_pricing_rule(&self, rule: PricingRule) {
        self.pricing_rules.insert(rule.id, rule);
    }

    /// Plant a reservation of any status, bypassing the conflict check.
    /// For loading historical data and test fixtures.
    pub fn insert_reservation(&self, reservation: Reservation) {
        self.reservations
            .entry(reservation.court_id)
            .or_default()
            .push(reservation);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── Catalog repositories ────────────────────────────────────────

#[async_trait]
impl CourtRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>> {
        Ok(self.courts.get(&id).map(|c| c.clone()))
    }
}

#[async_trait]
impl CoachRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Coach>> {
        Ok(self.coaches.get(&id).map(|c| c.clone()))
    }
}

#[async_trait]
impl EquipmentRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Equipment>> {
        Ok(self.equipment.get(&id).map(|e| e.clone()))
    }
}

#[async_trait]
impl PricingRuleRepository for InMemoryStore {
    async fn list_ordered(&self) -> DomainResult<Vec<PricingRule>> {
        let mut rules: Vec<PricingRule> =
            self.pricing_rules.iter().map(|e| e.value().clone()).collect();
        rules.sort_by_key(|r| (r.priority, r.id));
        Ok(rules)
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn find_conflicting(
        &self,
        court_id: i32,
        window: &TimeWindow,
    ) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&court_id).and_then(|slot| {
            slot.iter()
                .find(|r| r.blocks_slot() && r.window.overlaps(window))
                .cloned()
        }))
    }

    async fn insert_if_free(&self, new: NewReservation) -> DomainResult<Reservation> {
        // The entry guard stays held across check and insert; racing
        // inserts for the same court exclude each other here. A bucket
        // already held by another writer is reported as transient
        // rather than blocked on; the confirm path retries.
        let Some(entry) = self.reservations.try_entry(new.court_id) else {
            return Err(DomainError::Transient(format!(
                "Reservations for court {} are locked by another writer",
                new.court_id
            )));
        };
        let mut slot = entry.or_default();

        if slot
            .iter()
            .any(|r| r.blocks_slot() && r.window.overlaps(&new.window))
        {
            return Err(DomainError::SlotConflict {
                court_id: new.court_id,
            });
        }

        let id = self.reservation_counter.fetch_add(1, Ordering::SeqCst);
        let reservation = Reservation::confirmed(id, new);
        debug!(
            "Inserting reservation {} for court {} at {}",
            reservation.id, reservation.court_id, reservation.window
        );
        slot.push(reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .find_map(|slot| slot.value().iter().find(|r| r.id == id).cloned()))
    }

    async fn list_confirmed_starting_in(
        &self,
        range: &TimeWindow,
    ) -> DomainResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations
            .iter()
            .flat_map(|slot| {
                slot.value()
                    .iter()
                    .filter(|r| r.blocks_slot() && range.contains(r.window.start()))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        found.sort_by_key(|r| r.window.start());
        Ok(found)
    }
}

impl RepositoryProvider for InMemoryStore {
    fn courts(&self) -> &dyn CourtRepository {
        self
    }
    fn coaches(&self) -> &dyn CoachRepository {
        self
    }
    fn equipment(&self) -> &dyn EquipmentRepository {
        self
    }
    fn pricing_rules(&self) -> &dyn PricingRuleRepository {
        self
    }
    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

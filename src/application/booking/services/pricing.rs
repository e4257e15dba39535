//! Price calculation service
//!
//! Composes the court fee (base rate reshaped by the pricing-rule
//! snapshot), the optional coach fee and the equipment charges into a
//! rounded total with an itemized breakdown. Pure read: no storage
//! writes, so it backs live price previews as well as bookings.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use crate::application::booking::request::EquipmentLine;
use crate::config::Config;
use crate::domain::pricing::round_to_unit;
use crate::domain::{
    Court, DomainError, DomainResult, EquipmentCharge, PriceBreakdown, PricingRuleSet,
    RepositoryProvider, TimeWindow,
};

#[derive(Clone)]
pub struct PriceCalculator {
    repos: Arc<dyn RepositoryProvider>,
    config: Config,
}

impl PriceCalculator {
    pub fn new(repos: Arc<dyn RepositoryProvider>, config: Config) -> Self {
        Self { repos, config }
    }

    /// Price a reservation against the current catalog state.
    ///
    /// A requested coach that is missing or inactive fails the whole
    /// calculation: silently pricing a booking without its coach would
    /// drop a paid add-on. Unknown equipment ids instead contribute
    /// nothing and are reported in `skipped_equipment`.
    pub async fn compute_total(
        &self,
        court: &Court,
        window: &TimeWindow,
        coach_id: Option<i32>,
        equipment_lines: &[EquipmentLine],
    ) -> DomainResult<PriceBreakdown> {
        let rules = PricingRuleSet::new(self.repos.pricing_rules().list_ordered().await?);
        let (hourly_rate, applied) = rules.apply(court.hourly_rate, window);

        let duration = window.duration_hours();
        let court_fee = hourly_rate * duration;

        let coach_fee = match coach_id {
            Some(id) => {
                let coach = self
                    .repos
                    .coaches()
                    .find_by_id(id)
                    .await?
                    .filter(|c| c.is_bookable())
                    .ok_or(DomainError::CoachNotFound(id))?;
                coach.hourly_rate * duration
            }
            None => Decimal::ZERO,
        };

        let mut equipment_fee = Decimal::ZERO;
        let mut equipment = Vec::new();
        let mut skipped_equipment = Vec::new();

        for line in equipment_lines {
            match self.repos.equipment().find_by_id(line.equipment_id).await? {
                Some(item) => {
                    if line.quantity > item.stock {
                        // Stock is advisory; over-requests are priced
                        // anyway but leave a trace.
                        warn!(
                            equipment_id = item.id,
                            requested = line.quantity,
                            stock = item.stock,
                            "Requested quantity exceeds equipment stock"
                        );
                    }
                    let cost = item.unit_price * Decimal::from(line.quantity);
                    equipment_fee += cost;
                    equipment.push(EquipmentCharge {
                        equipment_id: item.id,
                        quantity: line.quantity,
                        unit_price: item.unit_price,
                        cost,
                    });
                }
                None => {
                    warn!(
                        equipment_id = line.equipment_id,
                        "Unknown equipment requested, line skipped"
                    );
                    skipped_equipment.push(line.equipment_id);
                }
            }
        }

        let total = round_to_unit(court_fee + coach_fee + equipment_fee);

        Ok(PriceBreakdown {
            court_fee,
            modifiers: applied.iter().map(|m| m.to_string()).collect(),
            coach_fee,
            equipment_fee,
            equipment,
            skipped_equipment,
            total,
            currency: self.config.currency.clone(),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

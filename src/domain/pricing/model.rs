//! Pricing rules and price breakdown
//!
//! A reservation's court fee starts at the court's base hourly rate and
//! is reshaped by every matching rule, applied sequentially in stable
//! `(priority, id)` order: `rate = rate * multiplier + addition`.
//! Rules of different kinds stack; a Saturday evening slot can take both
//! the weekend and the peak-hour modifier.

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Timelike, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::reservation::TimeWindow;

/// Rule kind selecting the matching predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Matches when the reservation starts inside a local time-of-day
    /// range, compared by whole hour.
    PeakHour,
    /// Matches on the reservation start's local weekday.
    Weekend,
    /// Same predicate as `Weekend`; kept distinct so catalogs can name
    /// and manage holiday surcharges separately.
    Holiday,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PeakHour => "peak_hour",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A conditional rate modifier from the pricing catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRule {
    pub id: i32,
    pub name: String,
    pub kind: RuleKind,
    /// Factor applied to the running rate on match (default 1).
    pub multiplier: Decimal,
    /// Flat amount added to the running rate on match (default 0).
    pub addition_amount: Decimal,
    /// Local time-of-day range `[start_time, end_time)`; required for
    /// `PeakHour`, ignored otherwise.
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// Matching weekdays; required for `Weekend`/`Holiday`.
    pub applicable_days: Vec<Weekday>,
    /// Explicit evaluation order. Rules are applied in ascending
    /// `(priority, id)`; compounding with nonzero additions is not
    /// commutative, so the order must never depend on how the catalog
    /// store happens to return rows.
    pub priority: i32,
}

impl PricingRule {
    /// Whether this rule applies to a reservation starting at `start`
    /// (already anchored to the business timezone).
    pub fn matches(&self, start: &DateTime<FixedOffset>) -> bool {
        match self.kind {
            RuleKind::Weekend | RuleKind::Holiday => {
                self.applicable_days.contains(&start.weekday())
            }
            RuleKind::PeakHour => match (self.start_time, self.end_time) {
                (Some(from), Some(until)) => {
                    // Whole-hour comparison: a 18:00-21:00 rule covers
                    // any start in hours 18..21, minutes ignored.
                    let hour = start.hour();
                    hour >= from.hour() && hour < until.hour()
                }
                _ => false,
            },
        }
    }
}

/// A rule that matched, recorded for the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedModifier {
    pub rule_name: String,
    pub multiplier: Decimal,
    pub addition: Decimal,
}

impl std::fmt::Display for AppliedModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (x{} +{})", self.rule_name, self.multiplier, self.addition)
    }
}

/// Ordered, read-only snapshot of the pricing-rule catalog.
///
/// Built once per calculation from the catalog store and never mutated
/// mid-calculation, so a price preview and the booking that follows it
/// see the same rules.
#[derive(Debug, Clone, Default)]
pub struct PricingRuleSet {
    rules: Vec<PricingRule>,
}

impl PricingRuleSet {
    /// Snapshot a rule collection, fixing the evaluation order to
    /// ascending `(priority, id)` regardless of input order.
    pub fn new(mut rules: Vec<PricingRule>) -> Self {
        rules.sort_by_key(|r| (r.priority, r.id));
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// Run every matching rule against `base_rate`, returning the final
    /// hourly rate and the modifiers that fired, in evaluation order.
    /// Never fails; an empty set returns the base rate unchanged.
    pub fn apply(
        &self,
        base_rate: Decimal,
        window: &TimeWindow,
    ) -> (Decimal, Vec<AppliedModifier>) {
        let start = window.start();
        let mut rate = base_rate;
        let mut applied = Vec::new();

        for rule in &self.rules {
            if rule.matches(&start) {
                rate = rate * rule.multiplier + rule.addition_amount;
                applied.push(AppliedModifier {
                    rule_name: rule.name.clone(),
                    multiplier: rule.multiplier,
                    addition: rule.addition_amount,
                });
            }
        }

        (rate, applied)
    }
}

/// One equipment line on a priced reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentCharge {
    pub equipment_id: i32,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

/// Itemized price components returned alongside the total, so a client
/// can render a receipt without re-deriving any of the math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Modified hourly rate times the window duration.
    pub court_fee: Decimal,
    /// Human-readable descriptions of the modifiers that fired, in
    /// application order.
    pub modifiers: Vec<String>,
    pub coach_fee: Decimal,
    pub equipment_fee: Decimal,
    pub equipment: Vec<EquipmentCharge>,
    /// Equipment ids from the request that were not found in the
    /// catalog. They contribute nothing but are surfaced here so a
    /// dropped add-on is visible instead of silently vanishing.
    pub skipped_equipment: Vec<i32>,
    /// Grand total, rounded half-up to a whole currency unit.
    pub total: Decimal,
    pub currency: String,
}

impl PriceBreakdown {
    pub fn format_total(&self) -> String {
        format!("{} {}", self.total, self.currency)
    }
}

/// Round a raw fee sum to a whole currency unit, half-up.
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    // 2025-06-07 is a Saturday.
    fn window_at(day: u32, hour: u32, minute: u32) -> TimeWindow {
        let tz = ist();
        let start = tz.with_ymd_and_hms(2025, 6, day, hour, minute, 0).unwrap();
        TimeWindow::new(start, start + chrono::Duration::hours(1)).unwrap()
    }

    fn peak_rule(id: i32, priority: i32) -> PricingRule {
        PricingRule {
            id,
            name: "Peak Hours (6PM - 9PM)".into(),
            kind: RuleKind::PeakHour,
            multiplier: Decimal::new(15, 1), // 1.5
            addition_amount: Decimal::ZERO,
            start_time: NaiveTime::from_hms_opt(18, 0, 0),
            end_time: NaiveTime::from_hms_opt(21, 0, 0),
            applicable_days: vec![],
            priority,
        }
    }

    fn weekend_rule(id: i32, priority: i32) -> PricingRule {
        PricingRule {
            id,
            name: "Weekend Surge".into(),
            kind: RuleKind::Weekend,
            multiplier: Decimal::new(12, 1), // 1.2
            addition_amount: Decimal::ZERO,
            start_time: None,
            end_time: None,
            applicable_days: vec![Weekday::Sat, Weekday::Sun],
            priority,
        }
    }

    #[test]
    fn empty_rule_set_returns_base_rate() {
        let rules = PricingRuleSet::default();
        let (rate, applied) = rules.apply(Decimal::from(200), &window_at(2, 10, 0));
        assert_eq!(rate, Decimal::from(200));
        assert!(applied.is_empty());
    }

    #[test]
    fn peak_rule_matches_start_hour() {
        let rules = PricingRuleSet::new(vec![peak_rule(1, 0)]);
        // Monday 18:00, peak window 18..21
        let (rate, applied) = rules.apply(Decimal::from(200), &window_at(2, 18, 0));
        assert_eq!(rate, Decimal::from(300));
        assert_eq!(applied.len(), 1);
        assert_eq!(
            applied[0].to_string(),
            "Peak Hours (6PM - 9PM) (x1.5 +0)"
        );
    }

    #[test]
    fn peak_rule_end_hour_is_exclusive() {
        let rules = PricingRuleSet::new(vec![peak_rule(1, 0)]);
        let (rate, applied) = rules.apply(Decimal::from(200), &window_at(2, 21, 0));
        assert_eq!(rate, Decimal::from(200));
        assert!(applied.is_empty());
    }

    #[test]
    fn peak_rule_compares_whole_hours() {
        let rules = PricingRuleSet::new(vec![peak_rule(1, 0)]);
        // 18:45 is still hour 18
        let (rate, _) = rules.apply(Decimal::from(200), &window_at(2, 18, 45));
        assert_eq!(rate, Decimal::from(300));
        // 17:59 is hour 17, not yet peak
        let (rate, _) = rules.apply(Decimal::from(200), &window_at(2, 17, 59));
        assert_eq!(rate, Decimal::from(200));
    }

    #[test]
    fn weekend_rule_matches_saturday() {
        let rules = PricingRuleSet::new(vec![weekend_rule(1, 0)]);
        let (rate, applied) = rules.apply(Decimal::from(100), &window_at(7, 10, 0));
        assert_eq!(rate, Decimal::from(120));
        assert_eq!(applied[0].rule_name, "Weekend Surge");
    }

    #[test]
    fn weekend_rule_skips_weekdays() {
        let rules = PricingRuleSet::new(vec![weekend_rule(1, 0)]);
        let (rate, applied) = rules.apply(Decimal::from(100), &window_at(2, 10, 0));
        assert_eq!(rate, Decimal::from(100));
        assert!(applied.is_empty());
    }

    #[test]
    fn rules_of_different_kinds_stack() {
        let rules = PricingRuleSet::new(vec![weekend_rule(1, 0), peak_rule(2, 1)]);
        // Saturday 18:00: 200 * 1.2 = 240, then 240 * 1.5 = 360
        let (rate, applied) = rules.apply(Decimal::from(200), &window_at(7, 18, 0));
        assert_eq!(rate, Decimal::from(360));
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].rule_name, "Weekend Surge");
        assert_eq!(applied[1].rule_name, "Peak Hours (6PM - 9PM)");
    }

    #[test]
    fn priority_overrides_insertion_order() {
        // Same rules, priorities flipped: peak first, then weekend.
        let rules = PricingRuleSet::new(vec![weekend_rule(1, 5), peak_rule(2, 0)]);
        let (_, applied) = rules.apply(Decimal::from(200), &window_at(7, 18, 0));
        assert_eq!(applied[0].rule_name, "Peak Hours (6PM - 9PM)");
        assert_eq!(applied[1].rule_name, "Weekend Surge");
    }

    #[test]
    fn application_order_matters_with_additions() {
        let mut surcharge = weekend_rule(1, 0);
        surcharge.addition_amount = Decimal::from(50);
        let peak = peak_rule(2, 1);

        // Saturday 18:00, base 100:
        //   (100 * 1.2 + 50) = 170, then 170 * 1.5 = 255
        let forward = PricingRuleSet::new(vec![surcharge.clone(), peak.clone()]);
        let (rate, _) = forward.apply(Decimal::from(100), &window_at(7, 18, 0));
        assert_eq!(rate, Decimal::from(255));

        // Reversed: 100 * 1.5 = 150, then 150 * 1.2 + 50 = 230
        let mut surcharge_last = surcharge;
        surcharge_last.priority = 2;
        let mut peak_first = peak;
        peak_first.priority = 0;
        let reversed = PricingRuleSet::new(vec![surcharge_last, peak_first]);
        let (rate, _) = reversed.apply(Decimal::from(100), &window_at(7, 18, 0));
        assert_eq!(rate, Decimal::from(230));
    }

    #[test]
    fn peak_rule_without_time_range_never_matches() {
        let mut rule = peak_rule(1, 0);
        rule.start_time = None;
        let rules = PricingRuleSet::new(vec![rule]);
        let (rate, applied) = rules.apply(Decimal::from(200), &window_at(2, 18, 0));
        assert_eq!(rate, Decimal::from(200));
        assert!(applied.is_empty());
    }

    #[test]
    fn round_to_unit_is_half_up() {
        assert_eq!(round_to_unit(Decimal::new(2395, 1)), Decimal::from(240)); // 239.5
        assert_eq!(round_to_unit(Decimal::new(2394, 1)), Decimal::from(239)); // 239.4
        assert_eq!(round_to_unit(Decimal::from(240)), Decimal::from(240));
    }
}

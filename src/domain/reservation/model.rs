//! Reservation domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::window::TimeWindow;
use crate::domain::pricing::{EquipmentCharge, PriceBreakdown};

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    /// Holds the slot. Only confirmed reservations block new bookings.
    Confirmed,
    Canceled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "canceled" => Self::Canceled,
            "completed" => Self::Completed,
            _ => Self::Canceled,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A confirmed (or historical) court reservation with its price
/// snapshot. `total_price` and `breakdown` are fixed at booking time;
/// later catalog edits never change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub court_id: i32,
    pub coach_id: Option<i32>,
    pub window: TimeWindow,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub breakdown: PriceBreakdown,
    /// Equipment line items persisted with the reservation.
    pub equipment: Vec<EquipmentCharge>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Materialize a confirmed reservation from an accepted booking.
    pub fn confirmed(id: i32, new: NewReservation) -> Self {
        Self {
            id,
            user_id: new.user_id,
            court_id: new.court_id,
            coach_id: new.coach_id,
            window: new.window,
            status: BookingStatus::Confirmed,
            total_price: new.total_price,
            breakdown: new.breakdown,
            equipment: new.equipment,
            created_at: Utc::now(),
        }
    }

    /// Whether this reservation holds its slot against new bookings.
    pub fn blocks_slot(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// A fully priced reservation awaiting the atomic store insert.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: i32,
    pub court_id: i32,
    pub coach_id: Option<i32>,
    pub window: TimeWindow,
    pub total_price: Decimal,
    pub breakdown: PriceBreakdown,
    pub equipment: Vec<EquipmentCharge>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn sample_window() -> TimeWindow {
        let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        TimeWindow::new(
            tz.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
            tz.with_ymd_and_hms(2025, 6, 2, 11, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn sample_breakdown(total: Decimal) -> PriceBreakdown {
        PriceBreakdown {
            court_fee: total,
            modifiers: vec![],
            coach_fee: Decimal::ZERO,
            equipment_fee: Decimal::ZERO,
            equipment: vec![],
            skipped_equipment: vec![],
            total,
            currency: "INR".into(),
        }
    }

    #[test]
    fn confirmed_reservation_blocks_slot() {
        let new = NewReservation {
            user_id: 7,
            court_id: 1,
            coach_id: None,
            window: sample_window(),
            total_price: Decimal::from(200),
            breakdown: sample_breakdown(Decimal::from(200)),
            equipment: vec![],
        };
        let r = Reservation::confirmed(1, new);
        assert_eq!(r.status, BookingStatus::Confirmed);
        assert!(r.blocks_slot());
        assert_eq!(r.total_price, Decimal::from(200));
    }

    #[test]
    fn non_confirmed_statuses_do_not_block() {
        let new = NewReservation {
            user_id: 7,
            court_id: 1,
            coach_id: None,
            window: sample_window(),
            total_price: Decimal::from(200),
            breakdown: sample_breakdown(Decimal::from(200)),
            equipment: vec![],
        };
        let mut r = Reservation::confirmed(1, new);
        for status in [
            BookingStatus::Pending,
            BookingStatus::Canceled,
            BookingStatus::Completed,
        ] {
            r.status = status;
            assert!(!r.blocks_slot(), "{status} must not block");
        }
    }

    #[test]
    fn status_string_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Canceled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_canceled() {
        assert_eq!(BookingStatus::from_str("garbage"), BookingStatus::Canceled);
    }
}

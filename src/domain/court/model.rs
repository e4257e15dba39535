//! Court domain entity

use rust_decimal::Decimal;

/// A bookable court with an hourly base rate.
///
/// Rate edits never touch existing reservations: the price is
/// snapshotted onto the reservation at booking time.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    pub name: String,
    /// Base rate per hour, before pricing-rule modifiers.
    pub hourly_rate: Decimal,
    pub is_active: bool,
}

impl Court {
    pub fn new(id: i32, name: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            hourly_rate,
            is_active: true,
        }
    }

    /// Deactivated courts cannot take new bookings.
    pub fn is_bookable(&self) -> bool {
        self.is_active
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_court_is_bookable() {
        let court = Court::new(1, "Court 1 (Indoor)", Decimal::from(200));
        assert!(court.is_bookable());
        assert_eq!(court.hourly_rate, Decimal::from(200));
    }

    #[test]
    fn inactive_court_is_not_bookable() {
        let mut court = Court::new(2, "Court 2 (Indoor)", Decimal::from(200));
        court.is_active = false;
        assert!(!court.is_bookable());
    }
}

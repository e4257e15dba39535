//! Coach add-on entity

use rust_decimal::Decimal;

/// An optional coaching add-on billed per hour of the reservation.
/// The coach fee is flat: pricing-rule multipliers never apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub hourly_rate: Decimal,
    pub is_active: bool,
}

impl Coach {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        specialization: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
            hourly_rate,
            is_active: true,
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.is_active
    }
}

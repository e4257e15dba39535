//! Rental equipment entity

use rust_decimal::Decimal;

/// Rentable equipment billed per unit and quantity.
///
/// `stock` is advisory: the engine reports over-requests in logs but
/// does not enforce stock limits on booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub unit_price: Decimal,
    pub stock: u32,
}

impl Equipment {
    pub fn new(id: i32, name: impl Into<String>, unit_price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            stock,
        }
    }
}

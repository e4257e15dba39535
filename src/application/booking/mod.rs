//! Booking use cases: availability checks, price previews and the
//! atomic confirm path.

pub mod request;
pub mod services;

pub use request::{BookingRequest, EquipmentLine};
pub use services::{AvailabilityChecker, BookingService, PriceCalculator};

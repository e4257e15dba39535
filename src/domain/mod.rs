pub mod coach;
pub mod court;
pub mod equipment;
pub mod pricing;
pub mod repositories;
pub mod reservation;

// Re-export commonly used types
pub use coach::Coach;
pub use court::Court;
pub use equipment::Equipment;
pub use pricing::{
    AppliedModifier, EquipmentCharge, PriceBreakdown, PricingRule, PricingRuleSet, RuleKind,
};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{BookingStatus, NewReservation, Reservation, TimeWindow};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;

pub mod model;
pub mod repository;

pub use model::{
    round_to_unit, AppliedModifier, EquipmentCharge, PriceBreakdown, PricingRule, PricingRuleSet,
    RuleKind,
};
pub use repository::PricingRuleRepository;

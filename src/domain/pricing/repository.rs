//! Pricing-rule catalog interface

use async_trait::async_trait;

use super::model::PricingRule;
use crate::domain::DomainResult;

/// Read-only access to the pricing-rule catalog.
#[async_trait]
pub trait PricingRuleRepository: Send + Sync {
    /// All rules in ascending `(priority, id)` order. Snapshot
    /// construction re-sorts, so an implementation returning rows in
    /// storage order still yields a stable evaluation order.
    async fn list_ordered(&self) -> DomainResult<Vec<PricingRule>>;
}

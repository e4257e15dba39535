//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::coach::CoachRepository;
use super::court::CourtRepository;
use super::equipment::EquipmentRepository;
use super::pricing::PricingRuleRepository;
use super::reservation::ReservationRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let court = repos.courts().find_by_id(1).await?;
///     let clash = repos.reservations().find_conflicting(1, &window).await?;
/// }
/// ```
///
/// The catalog repositories are read-only: the engine never writes to
/// courts, coaches, equipment or pricing rules. Admin CRUD is an
/// external collaborator.
pub trait RepositoryProvider: Send + Sync {
    fn courts(&self) -> &dyn CourtRepository;
    fn coaches(&self) -> &dyn CoachRepository;
    fn equipment(&self) -> &dyn EquipmentRepository;
    fn pricing_rules(&self) -> &dyn PricingRuleRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}

//! Court catalog lookup interface

use async_trait::async_trait;

use super::model::Court;
use crate::domain::DomainResult;

/// Read-only access to the externally-managed court catalog.
/// Admin CRUD lives outside the engine.
#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Court>>;
}

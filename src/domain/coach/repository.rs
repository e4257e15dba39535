//! Coach catalog lookup interface

use async_trait::async_trait;

use super::model::Coach;
use crate::domain::DomainResult;

#[async_trait]
pub trait CoachRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Coach>>;
}
